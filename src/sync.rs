//! Whole-document synchronization between an open [`ChannelTree`] and the
//! backend.
//!
//! There is no partial update: every save re-uploads the complete tree and
//! the last save to land wins. Failures are returned as-is; nothing is
//! retried and the in-memory tree is never rolled back.

use tracing::{debug, warn};

use crate::error::SyncError;
use crate::model::ChannelTree;
use crate::wire;

/// The backend endpoints, at the level of raw document strings.
pub trait ChannelBackend {
    fn list_channels(&self) -> Result<Vec<String>, SyncError>;

    fn get_channel(&self, name: &str) -> Result<String, SyncError>;

    fn set_channel(&self, name: &str, data: &str) -> Result<(), SyncError>;

    fn create_channel(&self, name: &str) -> Result<(), SyncError>;

    fn set_active_channel(&self, name: &str) -> Result<(), SyncError>;

    fn get_active_channel_name(&self) -> Result<Option<String>, SyncError>;
}

impl<B: ChannelBackend + ?Sized> ChannelBackend for &B {
    fn list_channels(&self) -> Result<Vec<String>, SyncError> {
        (**self).list_channels()
    }

    fn get_channel(&self, name: &str) -> Result<String, SyncError> {
        (**self).get_channel(name)
    }

    fn set_channel(&self, name: &str, data: &str) -> Result<(), SyncError> {
        (**self).set_channel(name, data)
    }

    fn create_channel(&self, name: &str) -> Result<(), SyncError> {
        (**self).create_channel(name)
    }

    fn set_active_channel(&self, name: &str) -> Result<(), SyncError> {
        (**self).set_active_channel(name)
    }

    fn get_active_channel_name(&self) -> Result<Option<String>, SyncError> {
        (**self).get_active_channel_name()
    }
}

pub struct SyncController<B> {
    backend: B,
}

impl<B: ChannelBackend> SyncController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn fetch(&self, name: &str) -> Result<ChannelTree, SyncError> {
        debug!(channel = name, "fetch channel");
        let doc = self.backend.get_channel(name).inspect_err(|err| {
            warn!(channel = name, error = %err, "fetch channel failed");
        })?;
        wire::from_wire_str(name, &doc).inspect_err(|err| {
            warn!(channel = name, error = %err, "decode channel failed");
        })
    }

    pub fn save(&self, tree: &ChannelTree) -> Result<(), SyncError> {
        let name = tree.channel_name();
        let data = wire::to_wire_string(tree);
        debug!(channel = name, bytes = data.len(), "save channel");
        self.backend.set_channel(name, &data).inspect_err(|err| {
            warn!(channel = name, error = %err, "save channel failed");
        })
    }

    pub fn list_channels(&self) -> Result<Vec<String>, SyncError> {
        self.backend.list_channels()
    }

    pub fn create_channel(&self, name: &str) -> Result<(), SyncError> {
        debug!(channel = name, "create channel");
        self.backend.create_channel(name)
    }

    pub fn set_active(&self, name: &str) -> Result<(), SyncError> {
        debug!(channel = name, "set active channel");
        self.backend.set_active_channel(name)
    }

    pub fn active_channel_name(&self) -> Result<Option<String>, SyncError> {
        self.backend.get_active_channel_name()
    }

    /// Fetches the active channel's tree; `None` when no channel is active.
    /// The document is fetched by name so it always matches the name read
    /// first, even if the active channel changes in between.
    pub fn fetch_active(&self) -> Result<Option<ChannelTree>, SyncError> {
        let Some(name) = self.backend.get_active_channel_name()? else {
            return Ok(None);
        };
        self.fetch(&name).map(Some)
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;
