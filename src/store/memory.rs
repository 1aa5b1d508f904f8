use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::{KeyValueStore, Lookup};

/// In-process stand-in for the external store
///
/// `set_online(false)` makes every operation fail the way a severed
/// connection would, without touching the stored data.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    online: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            online: AtomicBool::new(true),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(anyhow!("connection refused"))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        self.check_online()
    }

    async fn get(&self, key: &str) -> Lookup {
        if let Err(err) = self.check_online() {
            return Lookup::Error(err);
        }
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(value) => Lookup::Found(value.clone()),
            None => Lookup::NotFound,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_online()?;
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_store_fails_every_operation() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        store.set_online(false);

        assert!(store.ping().await.is_err());
        assert!(store.set("k", "w").await.is_err());
        assert!(matches!(store.get("k").await, Lookup::Error(_)));

        store.set_online(true);
        assert!(matches!(store.get("k").await, Lookup::Found(v) if v == "v"));
    }
}
