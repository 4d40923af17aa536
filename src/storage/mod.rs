//! Storage Module
//!
//! Key-value slots the record store persists into.
//!
//! ## Responsibilities
//! - Read a whole slot as text (absent slot is not an error)
//! - Replace a whole slot with new text
//!
//! ## Slot Layout (file backend)
//! ```text
//! {data_dir}/
//!   ├── teachers-data.json      (JSON array of teacher records)
//!   └── teachers-data.json.tmp  (only while a write is in flight)
//! ```

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A durable (or not) key-value substrate holding text slots
pub trait Storage {
    /// Read a slot, `Ok(None)` when it was never written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's contents
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
