//! Flag store backed by a JSON file in the user's data directory

use super::traits::{FlagStore, FlagStoreError};
use async_trait::async_trait;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Flags kept as a flat JSON object, e.g. `{"first": "1"}`
#[derive(Debug, Clone)]
pub struct JsonFlagStore {
    path: PathBuf,
}

impl JsonFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform data directory location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "notice-forge", "notice-forge")
            .map(|dirs| dirs.data_dir().join("flags.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All flags; a missing, blank, or malformed file means none are set.
    ///
    /// A malformed file is overwritten by the next `set`.
    async fn read_all(&self) -> Result<BTreeMap<String, String>, FlagStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(flags) => Ok(flags),
            Err(err) => {
                tracing::warn!(
                    "Ignoring malformed flag file {}: {err}",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

#[async_trait]
impl FlagStore for JsonFlagStore {
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        let mut flags = self.read_all().await?;
        flags.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&flags)?;
        fs::write(&self.path, content).await?;
        tracing::debug!("Stored flag {key}={value} in {}", self.path.display());
        Ok(())
    }
}
