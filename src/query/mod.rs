//! Query Module
//!
//! Pure, read-only views over a record snapshot.
//!
//! ## Pipeline
//! ```text
//!   records ──▶ filter(criteria) ──▶ sort(field, direction) ──▶ view
//!      │
//!      └──────▶ Statistics::compute (full set, filtered count supplied)
//! ```
//!
//! Nothing here mutates its input; views borrow from the store.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{filter, FilterCriteria, StatusFilter};
pub use sort::{sort, SortConfig, SortDirection, SortField};
pub use stats::Statistics;
