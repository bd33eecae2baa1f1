use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, ClientState, RemoteConfig};

const STORE_DIR: &str = ".chanbuild";

pub const URL_ENV: &str = "CHANBUILD_URL";
pub const SESSION_ENV: &str = "CHANBUILD_SESSION";

/// Client-side configuration directory (`.chanbuild/`): `config.json` for
/// the backend location, `state.json` for the session and editor state.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn store_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(dir: &Path) -> Result<Self> {
        let root = Self::store_dir(dir);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `chanbuild login`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self { root })
    }

    /// Creates `.chanbuild/` in `dir`, keeping existing files.
    pub fn init(dir: &Path) -> Result<Self> {
        let root = Self::store_dir(dir);
        fs::create_dir_all(&root).with_context(|| format!("create {}", root.display()))?;
        let store = Self { root };

        if !store.root.join("config.json").exists() {
            store.write_config(&ClientConfig {
                version: 1,
                remote: None,
            })?;
        }
        Ok(store)
    }

    /// Finds the nearest `.chanbuild/` in `start` or one of its ancestors.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::store_dir(dir).is_dir() {
                return Self::open(dir);
            }
        }
        Err(anyhow!(
            "No {} directory found (run `chanbuild login --url ... --session ...`)",
            STORE_DIR
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let bytes = fs::read(self.root.join("config.json")).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<ClientState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(ClientState {
                version: 1,
                ..ClientState::default()
            });
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: ClientState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported client state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &ClientState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }

    fn session_key(remote: &RemoteConfig) -> String {
        remote.base_url.trim_end_matches('/').to_string()
    }

    pub fn get_session(&self, remote: &RemoteConfig) -> Result<Option<String>> {
        let st = self.read_state()?;
        Ok(st.sessions.get(&Self::session_key(remote)).cloned())
    }

    pub fn set_session(&self, remote: &RemoteConfig, session: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.sessions
            .insert(Self::session_key(remote), session.to_string());
        self.write_state(&st)
    }

    pub fn clear_session(&self, remote: &RemoteConfig) -> Result<()> {
        let mut st = self.read_state()?;
        st.sessions.remove(&Self::session_key(remote));
        self.write_state(&st)
    }

    pub fn last_channel(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.last_channel)
    }

    pub fn set_last_channel(&self, name: Option<&str>) -> Result<()> {
        let mut st = self.read_state()?;
        st.last_channel = name.map(str::to_string);
        self.write_state(&st)
    }
}

/// Backend location and session cookie for this invocation.
///
/// `CHANBUILD_URL` and `CHANBUILD_SESSION` take precedence over the nearest
/// `.chanbuild/`; when both are set no store is needed at all.
pub fn resolve_credentials(start: &Path) -> Result<(RemoteConfig, String)> {
    resolve_with_overrides(start, env_value(URL_ENV), env_value(SESSION_ENV))
}

fn resolve_with_overrides(
    start: &Path,
    url: Option<String>,
    session: Option<String>,
) -> Result<(RemoteConfig, String)> {
    if let (Some(base_url), Some(session)) = (url.clone(), session.clone()) {
        return Ok((RemoteConfig { base_url }, session));
    }

    let store = LocalStore::discover(start)?;
    let remote = match url {
        Some(base_url) => RemoteConfig { base_url },
        None => store
            .read_config()?
            .remote
            .context("no backend configured (run `chanbuild login --url ... --session ...`)")?,
    };
    let session = match session {
        Some(s) => s,
        None => store.get_session(&remote)?.context(
            "no session stored for this backend (run `chanbuild login --url ... --session ...`)",
        )?,
    };
    Ok((remote, session))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
