//! In-memory [`ChannelBackend`] for unit tests, with per-endpoint failure
//! injection.

use std::cell::RefCell;

use crate::error::SyncError;
use crate::sync::ChannelBackend;

#[derive(Debug, Default)]
struct MemoryState {
    channels: Vec<(String, String)>,
    active: Option<String>,
    failing: Vec<&'static str>,
    calls: Vec<String>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryBackend {
    state: RefCell<MemoryState>,
}

impl MemoryBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_channel(self, name: &str, doc: &str) -> Self {
        self.state
            .borrow_mut()
            .channels
            .push((name.to_string(), doc.to_string()));
        self
    }

    pub(crate) fn with_active(self, name: &str) -> Self {
        self.state.borrow_mut().active = Some(name.to_string());
        self
    }

    /// Makes every later call to `endpoint` fail with HTTP 500.
    pub(crate) fn fail_on(&self, endpoint: &'static str) {
        self.state.borrow_mut().failing.push(endpoint);
    }

    pub(crate) fn heal(&self) {
        self.state.borrow_mut().failing.clear();
    }

    pub(crate) fn stored(&self, name: &str) -> Option<String> {
        self.state
            .borrow()
            .channels
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.clone())
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    fn enter(&self, endpoint: &'static str) -> Result<(), SyncError> {
        let mut st = self.state.borrow_mut();
        st.calls.push(endpoint.to_string());
        if st.failing.contains(&endpoint) {
            return Err(SyncError::Network {
                status: Some(500),
                message: format!("{}: injected failure", endpoint),
            });
        }
        Ok(())
    }

    fn not_found(endpoint: &str, name: &str) -> SyncError {
        SyncError::Network {
            status: Some(404),
            message: format!("{}: unknown channel '{}'", endpoint, name),
        }
    }
}

impl ChannelBackend for MemoryBackend {
    fn list_channels(&self) -> Result<Vec<String>, SyncError> {
        self.enter("get_channel_lists")?;
        Ok(self
            .state
            .borrow()
            .channels
            .iter()
            .map(|(n, _)| n.clone())
            .collect())
    }

    fn get_channel(&self, name: &str) -> Result<String, SyncError> {
        self.enter("get_channel_list")?;
        self.stored(name)
            .ok_or_else(|| Self::not_found("get_channel_list", name))
    }

    fn set_channel(&self, name: &str, data: &str) -> Result<(), SyncError> {
        self.enter("set_channel_list")?;
        let mut st = self.state.borrow_mut();
        let slot = st
            .channels
            .iter_mut()
            .find(|(n, _)| n == name)
            .ok_or_else(|| Self::not_found("set_channel_list", name))?;
        slot.1 = data.to_string();
        Ok(())
    }

    fn create_channel(&self, name: &str) -> Result<(), SyncError> {
        self.enter("create_channel_list")?;
        let mut st = self.state.borrow_mut();
        if st.channels.iter().any(|(n, _)| n == name) {
            return Err(SyncError::Network {
                status: Some(409),
                message: format!("create_channel_list: '{}' already exists", name),
            });
        }
        st.channels
            .push((name.to_string(), r#"{"entries": []}"#.to_string()));
        Ok(())
    }

    fn set_active_channel(&self, name: &str) -> Result<(), SyncError> {
        self.enter("set_active_channel")?;
        let mut st = self.state.borrow_mut();
        if !st.channels.iter().any(|(n, _)| n == name) {
            return Err(Self::not_found("set_active_channel", name));
        }
        st.active = Some(name.to_string());
        Ok(())
    }

    fn get_active_channel_name(&self) -> Result<Option<String>, SyncError> {
        self.enter("get_active_channel_name")?;
        Ok(self.state.borrow().active.clone())
    }
}
