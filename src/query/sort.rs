//! Sort Engine
//!
//! Stable, non-mutating ordering of records by one field.
//!
//! Date fields compare by instant; every other field compares as a
//! case-insensitive string. The field kind is resolved up front into a
//! `SortKey`, so a single sort never mixes the two.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, Utc};

use crate::error::TrackerError;
use crate::record::Teacher;

/// Sortable record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Name,
    Nip,
    Position,
    School,
    RetirementDate,
    ProgressStatus,
    DocumentLink,
    CreatedAt,
    UpdatedAt,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison outcome
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Comparison key extracted from one record for one field
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Instant(DateTime<Utc>),
    Text(String),
}

impl SortField {
    /// Every sortable field
    pub const ALL: [SortField; 10] = [
        SortField::Id,
        SortField::Name,
        SortField::Nip,
        SortField::Position,
        SortField::School,
        SortField::RetirementDate,
        SortField::ProgressStatus,
        SortField::DocumentLink,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    /// Record field name as it appears in the persisted JSON
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Nip => "nip",
            SortField::Position => "position",
            SortField::School => "school",
            SortField::RetirementDate => "retirementDate",
            SortField::ProgressStatus => "progressStatus",
            SortField::DocumentLink => "documentLink",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    /// Whether this field compares by instant rather than text
    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            SortField::RetirementDate | SortField::CreatedAt | SortField::UpdatedAt
        )
    }

    fn key(self, teacher: &Teacher) -> SortKey {
        match self {
            SortField::RetirementDate => {
                SortKey::Instant(teacher.retirement_date.and_time(NaiveTime::MIN).and_utc())
            }
            SortField::CreatedAt => SortKey::Instant(teacher.created_at),
            SortField::UpdatedAt => SortKey::Instant(teacher.updated_at),
            SortField::Id => text(&teacher.id),
            SortField::Name => text(&teacher.name),
            SortField::Nip => text(&teacher.nip),
            SortField::Position => text(&teacher.position),
            SortField::School => text(&teacher.school),
            SortField::ProgressStatus => text(teacher.progress_status.label()),
            SortField::DocumentLink => text(teacher.document_link.as_deref().unwrap_or("")),
        }
    }
}

fn text(value: &str) -> SortKey {
    SortKey::Text(value.to_lowercase())
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = TrackerError;

    /// Accepts the JSON field name or its snake_case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace(['_', '-'], "").to_lowercase();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == wanted)
            .ok_or_else(|| TrackerError::Config(format!("Unknown sort field: {}", s)))
    }
}

/// Current sort preference; `field == None` keeps filter order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Column-header click: same field while ascending flips to descending,
    /// anything else sorts by `field` ascending
    pub fn request(&mut self, field: SortField) {
        self.direction = if self.field == Some(field) && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.field = Some(field);
    }

    /// Order `records` by this config, or leave them as they are
    pub fn apply<'a>(&self, records: Vec<&'a Teacher>) -> Vec<&'a Teacher> {
        match self.field {
            Some(field) => sort(records, field, self.direction),
            None => records,
        }
    }
}

/// Return `records` ordered by `field`
///
/// Stable in both directions: `Desc` reverses each comparison, so records
/// with equal keys keep their input order.
pub fn sort<'a, I>(records: I, field: SortField, direction: SortDirection) -> Vec<&'a Teacher>
where
    I: IntoIterator<Item = &'a Teacher>,
{
    let mut keyed: Vec<(SortKey, &'a Teacher)> = records
        .into_iter()
        .map(|teacher| (field.key(teacher), teacher))
        .collect();

    // slice::sort_by is stable
    keyed.sort_by(|a, b| direction.apply(a.0.cmp(&b.0)));

    keyed.into_iter().map(|(_, teacher)| teacher).collect()
}
