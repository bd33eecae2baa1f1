use anyhow::{Context, Result};

use chanbuild::remote::RemoteClient;
use chanbuild::store::LocalStore;
use chanbuild::sync::SyncController;

use crate::Commands;
use crate::cli_runtime::require_remote_and_session;

mod channels;
mod dispatch;
mod edit;
mod identity;
mod workspace;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    dispatch::handle_command(command)
}
