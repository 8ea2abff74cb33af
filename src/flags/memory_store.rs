//! In-process flag store

use super::traits::{FlagStore, FlagStoreError};
use async_trait::async_trait;
use std::collections::HashMap;

/// Flags that live only as long as the process
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flags: HashMap<String, String>,
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        Ok(self.flags.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        self.flags.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_unset_flag_is_none() {
        let store = MemoryFlagStore::default();
        assert_eq!(block_on(store.get("first")).unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryFlagStore::default();
        block_on(store.set("first", "1")).unwrap();
        assert_eq!(block_on(store.get("first")).unwrap().as_deref(), Some("1"));
    }
}
