use super::*;

const CHANNELS_FILE: &str = "channels.json";
const STORE_VERSION: u32 = 1;

pub(super) const EMPTY_CHANNEL_DOC: &str = r#"{"entries": []}"#;
pub(super) const SEED_CHANNEL: &str = "First Channel";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub(super) struct StoredChannel {
    pub(super) name: String,
    /// Raw JSON text exactly as the client last sent it.
    pub(super) data: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub(super) struct ChannelStore {
    pub(super) version: u32,
    pub(super) channels: Vec<StoredChannel>,
    #[serde(default)]
    pub(super) active: Option<String>,
}

impl ChannelStore {
    pub(super) fn seeded() -> Self {
        Self {
            version: STORE_VERSION,
            channels: vec![StoredChannel {
                name: SEED_CHANNEL.to_string(),
                data: EMPTY_CHANNEL_DOC.to_string(),
            }],
            active: Some(SEED_CHANNEL.to_string()),
        }
    }

    pub(super) fn names(&self) -> Vec<String> {
        self.channels.iter().map(|c| c.name.clone()).collect()
    }

    pub(super) fn get(&self, name: &str) -> Option<&StoredChannel> {
        self.channels.iter().find(|c| c.name == name)
    }

    pub(super) fn get_mut(&mut self, name: &str) -> Option<&mut StoredChannel> {
        self.channels.iter_mut().find(|c| c.name == name)
    }

    pub(super) fn active_channel(&self) -> Option<&StoredChannel> {
        self.active.as_deref().and_then(|name| self.get(name))
    }
}

pub(super) fn channels_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CHANNELS_FILE)
}

/// Loads `channels.json`, seeding and persisting a fresh store when the file
/// does not exist yet.
pub(super) fn load_channels_from_disk(data_dir: &Path) -> Result<ChannelStore> {
    let path = channels_path(data_dir);
    if !path.exists() {
        let store = ChannelStore::seeded();
        persist_channels(data_dir, &store)?;
        return Ok(store);
    }
    let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
    let store: ChannelStore = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse {}", path.display()))?;
    if store.version != STORE_VERSION {
        anyhow::bail!(
            "unsupported channels.json version {} (expected {})",
            store.version,
            STORE_VERSION
        );
    }
    Ok(store)
}

pub(super) fn persist_channels(data_dir: &Path, store: &ChannelStore) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(store).context("serialize channels")?;
    write_atomic_overwrite(&channels_path(data_dir), &bytes).context("write channels.json")?;
    Ok(())
}

fn write_atomic_overwrite(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    std::fs::write(&tmp, bytes).with_context(|| format!("write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
