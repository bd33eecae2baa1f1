use anyhow::{Context, Result};
use clap::Parser;

use chanbuild::logging::{self, LogTarget};
use chanbuild::model::RemoteConfig;

use crate::Commands;

#[derive(Parser)]
#[command(name = "chanbuild")]
#[command(about = "Build and publish streaming channel lists", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            logging::init(LogTarget::FileOnly, "info")?;
            chanbuild::tui::run()?;
        }
        Some(command) => {
            logging::init(LogTarget::Stderr, "warn")?;
            crate::cli_exec::handle_command(command)?
        }
    }

    Ok(())
}

pub(crate) fn require_remote_and_session() -> Result<(RemoteConfig, String)> {
    let cwd = std::env::current_dir().context("get current dir")?;
    chanbuild::store::resolve_credentials(&cwd)
}
