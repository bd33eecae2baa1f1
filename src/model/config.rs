use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Backend root, e.g. `https://api.example.net`; endpoints live under
    /// `/api/v1/`.
    pub base_url: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClientState {
    pub version: u32,

    /// Session cookie values keyed by backend base URL. Kept out of
    /// config.json so the config can be shared.
    #[serde(default)]
    pub sessions: std::collections::HashMap<String, String>,

    /// Channel the editor reopens on start.
    #[serde(default)]
    pub last_channel: Option<String>,
}
