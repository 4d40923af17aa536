//! Statistics Aggregator
//!
//! Summary counts shown above the record table.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};

use crate::record::{ProgressStatus, Teacher};

/// Summary over the full record set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of records in the store
    pub total: usize,

    /// Count per status, only for statuses that occur
    pub status_counts: BTreeMap<ProgressStatus, usize>,

    /// Records retiring in the current calendar year
    pub retiring_this_year: usize,

    /// Size of the current filtered view (supplied by the caller)
    pub filtered: usize,
}

impl Statistics {
    /// Aggregate `records` as of `today`
    pub fn compute(records: &[Teacher], filtered: usize, today: NaiveDate) -> Self {
        let mut status_counts = BTreeMap::new();
        for teacher in records {
            *status_counts.entry(teacher.progress_status).or_insert(0) += 1;
        }

        let retiring_this_year = records
            .iter()
            .filter(|t| t.retirement_date.year() == today.year())
            .count();

        Self {
            total: records.len(),
            status_counts,
            retiring_this_year,
            filtered,
        }
    }

    /// Aggregate as of the local calendar date
    pub fn now(records: &[Teacher], filtered: usize) -> Self {
        Self::compute(records, filtered, Local::now().date_naive())
    }

    /// Count for one status, zero when it does not occur
    pub fn count(&self, status: ProgressStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }
}
