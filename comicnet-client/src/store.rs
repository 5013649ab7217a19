use std::{
    collections::{BTreeMap, HashMap},
    io,
    path::PathBuf,
};

use anyhow::Context;
use async_trait::async_trait;
use parking_lot::Mutex;

/// Key-value storage for user preferences that outlive a session
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore(Mutex<HashMap<String, String>>);

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.0.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.0.lock().insert(String::from(key), String::from(value));
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in a single file
///
/// A missing file reads as no preference set.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> FileStore {
        FileStore { path: path.into() }
    }

    async fn read_all(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading preferences from {:?}", self.path))
            }
        };
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing preferences from {:?}", self.path))
    }
}

#[async_trait]
impl PreferenceStore for FileStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut prefs = self.read_all().await?;
        prefs.insert(String::from(key), String::from(value));
        let contents = serde_json::to_string_pretty(&prefs).context("serializing preferences")?;
        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("writing preferences to {:?}", self.path))
    }
}
