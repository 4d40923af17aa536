//! Progress status of a retirement submission

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Where a teacher's retirement submission currently stands
///
/// Serialized by display label so persisted data stays readable by the
/// browser build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProgressStatus {
    #[serde(rename = "Belum Diajukan")]
    NotSubmitted,

    #[serde(rename = "Dalam Proses")]
    InProgress,

    #[serde(rename = "Disetujui")]
    Approved,

    #[serde(rename = "Ditolak")]
    Rejected,
}

impl ProgressStatus {
    /// Every status in declaration order
    pub const ALL: [ProgressStatus; 4] = [
        ProgressStatus::NotSubmitted,
        ProgressStatus::InProgress,
        ProgressStatus::Approved,
        ProgressStatus::Rejected,
    ];

    /// Display label, identical to the serialized form
    pub fn label(self) -> &'static str {
        match self {
            ProgressStatus::NotSubmitted => "Belum Diajukan",
            ProgressStatus::InProgress => "Dalam Proses",
            ProgressStatus::Approved => "Disetujui",
            ProgressStatus::Rejected => "Ditolak",
        }
    }

    /// English name, accepted when parsing
    pub fn english_name(self) -> &'static str {
        match self {
            ProgressStatus::NotSubmitted => "Not Submitted",
            ProgressStatus::InProgress => "In Progress",
            ProgressStatus::Approved => "Approved",
            ProgressStatus::Rejected => "Rejected",
        }
    }
}

impl Default for ProgressStatus {
    fn default() -> Self {
        ProgressStatus::NotSubmitted
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProgressStatus {
    type Err = TrackerError;

    /// Accepts the label or the English name, ignoring case, spaces,
    /// dashes and underscores ("dalam-proses", "in_progress", "Approved")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ProgressStatus::ALL
            .into_iter()
            .find(|status| {
                normalize(status.label()) == wanted || normalize(status.english_name()) == wanted
            })
            .ok_or_else(|| TrackerError::Config(format!("Unknown progress status: {}", s)))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
