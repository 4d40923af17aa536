//! Export Module
//!
//! Spreadsheet export of teacher records.
//!
//! ## Responsibilities
//! - Build the three-sheet report model (`workbook`)
//! - Format dates and filenames (`format`)
//! - Write the model as `.xlsx` (`writer`)
//!
//! Export either produces the complete file or returns
//! `TrackerError::Export`; there are no retries and no partial results.

pub mod format;
pub mod workbook;
pub mod writer;

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, info};

use crate::config::{Config, DEFAULT_EXPORT_PREFIX};
use crate::error::{Result, TrackerError};
use crate::record::Teacher;

pub use format::generate_export_filename;
pub use workbook::{build_workbook, Cell, SheetModel, WorkbookModel};
pub use writer::{render_workbook, write_workbook};

/// Prefix used when exporting a filtered view
pub const FILTERED_EXPORT_PREFIX: &str = "data_pensiun_guru_filtered";

/// Export settings chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Add the `Link Berkas` column to the main sheet
    pub include_document_links: bool,

    /// Output filename; generated from the prefix and current time when absent
    pub filename: Option<String>,

    /// Prefix for generated filenames
    pub prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_document_links: true,
            filename: None,
            prefix: DEFAULT_EXPORT_PREFIX.to_string(),
        }
    }
}

impl ExportOptions {
    /// Options seeded from the workspace configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            include_document_links: config.include_document_links,
            filename: None,
            prefix: config.export_prefix.clone(),
        }
    }

    /// Options for exporting a filtered view
    pub fn filtered(mut self) -> Self {
        self.prefix = FILTERED_EXPORT_PREFIX.to_string();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_document_links(mut self, include: bool) -> Self {
        self.include_document_links = include;
        self
    }
}

/// Build and write the report for `records` into `dir`
///
/// Returns the path of the written file. Failures are logged and returned
/// as `TrackerError::Export`.
pub fn export_records(records: &[&Teacher], options: &ExportOptions, dir: &Path) -> Result<PathBuf> {
    let now = Local::now();

    let filename = match &options.filename {
        Some(name) if !name.trim().is_empty() => format::ensure_xlsx_extension(name.trim()),
        _ => generate_export_filename(&options.prefix, &now),
    };
    let path = dir.join(filename);

    let model = build_workbook(records, options, &now);

    match write_workbook(&model, &path) {
        Ok(()) => {
            info!(path = %path.display(), records = records.len(), "Spreadsheet exported");
            Ok(path)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Spreadsheet export failed");
            Err(match e {
                TrackerError::Export(message) => TrackerError::Export(message),
                other => TrackerError::Export(other.to_string()),
            })
        }
    }
}
