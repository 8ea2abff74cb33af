//! Trait abstraction for the flag store to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// Failure reading or writing persisted flags
#[derive(Debug, Error)]
pub enum FlagStoreError {
    #[error("flag file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("flag file is not a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Small string key/value store that outlives the process
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Current value of a flag, `None` if it was never set
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError>;

    /// Set a flag, creating the backing storage if needed
    async fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError>;
}
