//! Configuration for retiretrack
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a retiretrack workspace
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for persisted slots
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {storage_key}.json   (JSON array of teacher records)
    pub data_dir: PathBuf,

    /// Key of the slot holding the record list
    pub storage_key: String,

    // -------------------------------------------------------------------------
    // Form Configuration
    // -------------------------------------------------------------------------
    /// Largest accepted photo upload (in bytes)
    pub max_photo_bytes: usize,

    // -------------------------------------------------------------------------
    // Export Configuration
    // -------------------------------------------------------------------------
    /// Directory where spreadsheets are written
    pub export_dir: PathBuf,

    /// Prefix for generated spreadsheet filenames
    pub export_prefix: String,

    /// Whether the main sheet carries the document link column by default
    pub include_document_links: bool,
}

/// Default slot key, shared with the browser build's local storage
pub const DEFAULT_STORAGE_KEY: &str = "teachers-data";

/// Default spreadsheet filename prefix
pub const DEFAULT_EXPORT_PREFIX: &str = "data_pensiun_guru";

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./retiretrack_data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_photo_bytes: 5 * 1024 * 1024, // 5 MB
            export_dir: PathBuf::from("."),
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
            include_document_links: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for persisted slots)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the slot key for the record list
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Set the maximum photo size (in bytes)
    pub fn max_photo_bytes(mut self, size: usize) -> Self {
        self.config.max_photo_bytes = size;
        self
    }

    /// Set the directory spreadsheets are written to
    pub fn export_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.export_dir = path.into();
        self
    }

    /// Set the generated filename prefix
    pub fn export_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.export_prefix = prefix.into();
        self
    }

    /// Include or omit the document link column by default
    pub fn include_document_links(mut self, include: bool) -> Self {
        self.config.include_document_links = include;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
