use super::*;

pub(super) fn discover_store() -> Result<LocalStore> {
    LocalStore::discover(&std::env::current_dir().context("get current dir")?)
}

pub(super) fn with_store<F>(f: F) -> Result<()>
where
    F: FnOnce(&LocalStore) -> Result<()>,
{
    let store = discover_store()?;
    f(&store)
}

pub(super) fn with_sync<F>(f: F) -> Result<()>
where
    F: FnOnce(&SyncController<RemoteClient>) -> Result<()>,
{
    let (remote, session) = require_remote_and_session()?;
    let sync = SyncController::new(RemoteClient::new(remote, session)?);
    f(&sync)
}
