//! # retiretrack
//!
//! Record keeping for teacher retirement submissions:
//! - Record store persisted as a JSON array in a key-value slot
//! - Free-text, date-range and status filtering
//! - Stable, type-aware sorting
//! - Summary statistics
//! - Three-sheet `.xlsx` export
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Front end (CLI / UI callbacks)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Workspace                            │
//! │        (filters, sort config, selection, validation)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │ RecordStore │          │    Query     │──────▶ Export
//!   │  (owned)    │─────────▶│ filter/sort/ │        (.xlsx)
//!   └──────┬──────┘          │    stats     │
//!          │                 └──────────────┘
//!          ▼
//!   ┌─────────────┐
//!   │   Storage   │
//!   │ (JSON slot) │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod store;
pub mod query;
pub mod validation;
pub mod export;
pub mod workspace;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TrackerError, Result};
pub use config::Config;
pub use record::{NewTeacher, ProgressStatus, Teacher, TeacherPatch};
pub use store::RecordStore;
pub use workspace::Workspace;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of retiretrack
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
