//! Filter Engine
//!
//! Derives the visible subset of records from the current criteria.

use chrono::NaiveDate;

use crate::record::{ProgressStatus, Teacher};

/// Status part of the filter criteria
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Any status matches
    #[default]
    All,

    /// Only records with exactly this status
    Only(ProgressStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ProgressStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

/// The user's current view preference; never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text matched against name, nip, position, school and status
    pub search_text: String,

    /// Inclusive lower bound on the retirement date
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound on the retirement date
    pub end_date: Option<NaiveDate>,

    pub status: StatusFilter,
}

impl FilterCriteria {
    /// Whether any criterion narrows the view
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Whether a single record passes every criterion
    pub fn matches(&self, teacher: &Teacher) -> bool {
        self.text_matches(teacher) && self.date_matches(teacher) && self.status.matches(teacher.progress_status)
    }

    fn text_matches(&self, teacher: &Teacher) -> bool {
        if self.search_text.is_empty() {
            return true;
        }

        let needle = self.search_text.to_lowercase();

        // nip is matched raw; it is digits in practice
        teacher.name.to_lowercase().contains(&needle)
            || teacher.nip.contains(&needle)
            || teacher.position.to_lowercase().contains(&needle)
            || teacher.school.to_lowercase().contains(&needle)
            || teacher.progress_status.label().to_lowercase().contains(&needle)
    }

    /// Date-only values: start-of-day/end-of-day bounds reduce to plain
    /// inclusive date comparison
    fn date_matches(&self, teacher: &Teacher) -> bool {
        let date = teacher.retirement_date;

        self.start_date.map_or(true, |start| date >= start)
            && self.end_date.map_or(true, |end| date <= end)
    }
}

/// Keep the records matching `criteria`, preserving their order
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Teacher>
where
    I: IntoIterator<Item = &'a Teacher>,
{
    records
        .into_iter()
        .filter(|teacher| criteria.matches(teacher))
        .collect()
}
