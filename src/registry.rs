//! The account's channels: their display order, the active one, and the one
//! currently open for editing.

use tracing::{info, warn};

use crate::error::SyncError;
use crate::model::ChannelTree;
use crate::selection::SelectionState;
use crate::sync::{ChannelBackend, SyncController};

/// A channel open for edit together with its selection.
#[derive(Clone, Debug)]
pub struct OpenChannel {
    pub tree: ChannelTree,
    pub selection: SelectionState,
}

impl OpenChannel {
    fn placeholder(name: &str) -> Self {
        Self {
            tree: ChannelTree::new(name),
            selection: SelectionState::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.tree.channel_name()
    }

    pub fn save<B: ChannelBackend>(&self, sync: &SyncController<B>) -> Result<(), SyncError> {
        sync.save(&self.tree)
    }
}

#[derive(Debug, Default)]
pub struct ChannelListRegistry {
    names: Vec<String>,
    active: Option<String>,
    open: Option<OpenChannel>,
}

impl ChannelListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names in server order.
    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Replaces the local list with the backend's and re-reads the active
    /// channel name. The active name is best effort: when the backend cannot
    /// report it, the list still refreshes and no channel is marked active.
    pub fn refresh<B: ChannelBackend>(
        &mut self,
        sync: &SyncController<B>,
    ) -> Result<&[String], SyncError> {
        self.names = sync.list_channels()?;
        self.active = match sync.active_channel_name() {
            Ok(active) => active,
            Err(err) => {
                warn!(error = %err, "active channel name unavailable");
                None
            }
        };
        Ok(&self.names)
    }

    /// Appends `name` locally, then asks the backend to create it. The local
    /// append is kept even when the backend call fails.
    pub fn create<B: ChannelBackend>(
        &mut self,
        sync: &SyncController<B>,
        name: &str,
    ) -> Result<(), SyncError> {
        if name.trim().is_empty() {
            return Err(SyncError::InvalidChannelName {
                name: name.to_string(),
            });
        }

        if !self.contains(name) {
            self.names.push(name.to_string());
        }
        sync.create_channel(name).inspect_err(|err| {
            warn!(channel = name, error = %err, "create channel failed; local list kept");
        })?;
        info!(channel = name, "channel created");
        Ok(())
    }

    pub fn set_active<B: ChannelBackend>(
        &mut self,
        sync: &SyncController<B>,
        name: &str,
    ) -> Result<(), SyncError> {
        sync.set_active(name)?;
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Opens `name` for editing. The previous open channel is discarded and an
    /// empty placeholder is installed before fetching; on fetch failure the
    /// placeholder stays open and the error is returned.
    pub fn open<B: ChannelBackend>(
        &mut self,
        sync: &SyncController<B>,
        name: &str,
    ) -> Result<&mut OpenChannel, SyncError> {
        let open = self.open.insert(OpenChannel::placeholder(name));
        open.tree = sync.fetch(name)?;
        Ok(open)
    }

    pub fn open_channel(&self) -> Option<&OpenChannel> {
        self.open.as_ref()
    }

    pub fn open_channel_mut(&mut self) -> Option<&mut OpenChannel> {
        self.open.as_mut()
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
