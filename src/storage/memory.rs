//! In-memory storage
//!
//! HashMap behind a parking_lot RwLock. Clones share the same slots, so a
//! test can keep a handle and inspect what the store wrote.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;

use super::Storage;

/// Volatile key-value storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one slot already filled
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.slots.write().insert(key.into(), value.into());
        storage
    }

    /// Number of slots written so far
    pub fn slot_count(&self) -> usize {
        self.slots.read().len()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.slots.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
