//! Error types for retiretrack
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::validation::ValidationReport;

/// Result type alias using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Unified error type for retiretrack operations
#[derive(Debug, Error)]
pub enum TrackerError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Photo error: {0}")]
    Photo(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Export Errors
    // -------------------------------------------------------------------------
    #[error("Export error: {0}")]
    Export(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<rust_xlsxwriter::XlsxError> for TrackerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        TrackerError::Export(err.to_string())
    }
}
