use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub struct ServerGuard {
    pub base_url: String,
    pub session: String,
    pub data_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    let data_dir = tempfile::tempdir().context("create server tempdir")?;
    spawn_server_in(data_dir)
}

/// Starts the server over an existing data dir (used to check persistence
/// across restarts).
#[allow(dead_code)]
pub fn spawn_server_in(data_dir: tempfile::TempDir) -> Result<ServerGuard> {
    let session = "dev".to_string();

    let addr_file = data_dir.path().join("addr.txt");
    let _ = std::fs::remove_file(&addr_file);

    let child = Command::new(env!("CARGO_BIN_EXE_chanbuild-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--data-dir",
            data_dir.path().to_str().unwrap(),
            "--dev-session",
            &session,
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn chanbuild-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        session,
        data_dir,
        child,
    })
}

impl ServerGuard {
    /// Stops the process and hands back its data dir.
    #[allow(dead_code)]
    pub fn stop(mut self) -> tempfile::TempDir {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let placeholder = tempfile::tempdir().expect("placeholder tempdir");
        std::mem::replace(&mut self.data_dir, placeholder)
    }
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

#[allow(dead_code)]
pub fn session_cookie(session: &str) -> String {
    format!("session={}", session)
}

#[allow(dead_code)]
pub fn api(base_url: &str, endpoint: &str) -> String {
    format!("{}/api/v1/{}", base_url, endpoint)
}
