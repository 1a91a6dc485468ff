//! Snapshot Storage
//!
//! Durable key-value backends for the ticket snapshot.
//! `BrowserStorage` wraps `window.localStorage`; `MemoryStorage` keeps
//! values in-process (tests, or when localStorage is unavailable).

use std::collections::HashMap;

use crate::error::{BoardError, Result};

/// Key-value backend holding serialized snapshots
pub trait SnapshotStorage {
    /// Read the raw value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the page's local storage
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| BoardError::Storage("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| BoardError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { inner })
    }
}

impl SnapshotStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))
    }
}

/// In-process storage
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value
    #[cfg(test)]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Readable storage whose writes always fail, like a full localStorage
#[cfg(test)]
pub struct FailingStorage {
    inner: MemoryStorage,
}

#[cfg(test)]
impl FailingStorage {
    pub fn new() -> Self {
        Self { inner: MemoryStorage::new() }
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        Self { inner: MemoryStorage::with_value(key, value) }
    }
}

#[cfg(test)]
impl SnapshotStorage for FailingStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.inner.read(key)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(BoardError::Storage("QuotaExceededError".to_string()))
    }
}
