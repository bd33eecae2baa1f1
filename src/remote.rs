use anyhow::{Context, Result};

use crate::error::SyncError;
use crate::model::RemoteConfig;
use crate::sync::ChannelBackend;

mod http_client;
use self::http_client::transport_error;

mod types;
pub use self::types::*;
mod operations;

/// Blocking HTTP client for the channel endpoints. Authenticates with the
/// session cookie issued at login.
pub struct RemoteClient {
    remote: RemoteConfig,
    session: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(remote: RemoteConfig, session: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("chanbuild/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            remote,
            session,
            client,
        })
    }
}
