//! File-backed storage
//!
//! One JSON file per slot inside a data directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};

use super::Storage;

/// Durable key-value storage rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding one `{key}.json` per slot
    data_dir: PathBuf,
}

impl FileStorage {
    /// Open storage in the given directory, creating it if needed
    pub fn open(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)?;

        Ok(Self {
            data_dir: path.to_path_buf(),
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File path backing a slot
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.data_dir.join(format!("{}.json", key)))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Keys become filenames, so keep them to a safe alphabet
    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');

        if valid {
            Ok(())
        } else {
            Err(TrackerError::Storage(format!("Invalid slot key: {:?}", key)))
        }
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a sibling temp file, fsync, then rename over the slot so a
    /// crash mid-write leaves the previous contents intact
    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        let tmp_path = path.with_extension("json.tmp");

        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
