//! tracing subscriber setup shared by the binaries.
//!
//! `CHANBUILD_LOG` takes an `EnvFilter` directive (default `warn`).
//! `CHANBUILD_LOG_FILE` redirects output to a file, which is the only way to
//! get logs while the TUI owns the terminal.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CHANBUILD_LOG";
pub const LOG_FILE_ENV: &str = "CHANBUILD_LOG_FILE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Only log when `CHANBUILD_LOG_FILE` is set.
    FileOnly,
}

pub fn init(target: LogTarget, default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let log_file = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from);
    match (log_file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("{}", e))
                .context("install tracing subscriber")?;
        }
        (None, LogTarget::Stderr) => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("{}", e))
                .context("install tracing subscriber")?;
        }
        (None, LogTarget::FileOnly) => {}
    }
    Ok(())
}
