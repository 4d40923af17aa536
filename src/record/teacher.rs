//! Teacher record definitions
//!
//! Defines the persisted record, the creation payload and the partial
//! update applied by table edits.

use chrono::{DateTime, Duration, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ProgressStatus;

/// A single teacher's retirement record
///
/// Field names serialize in camelCase to match the persisted JSON slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Opaque unique identifier, assigned by the store
    pub id: String,

    /// Photo as a data URI (`data:image/png;base64,...`)
    pub photo: String,

    pub name: String,

    /// National employee identification number (digits only)
    pub nip: String,

    /// Job position/title
    pub position: String,

    pub school: String,

    pub retirement_date: NaiveDate,

    #[serde(default)]
    pub progress_status: ProgressStatus,

    /// Optional URL to supporting documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_link: Option<String>,

    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to create a record except the store-assigned fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub photo: String,
    pub name: String,
    pub nip: String,
    pub position: String,
    pub school: String,
    pub retirement_date: NaiveDate,
    pub progress_status: ProgressStatus,
    pub document_link: Option<String>,
}

/// Partial update of a record
///
/// `None` leaves a field untouched. `document_link` is tri-state:
/// `Some(None)` clears the link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherPatch {
    pub photo: Option<String>,
    pub name: Option<String>,
    pub nip: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub retirement_date: Option<NaiveDate>,
    pub progress_status: Option<ProgressStatus>,
    pub document_link: Option<Option<String>>,
}

impl TeacherPatch {
    /// Patch that only changes the progress status
    pub fn status(status: ProgressStatus) -> Self {
        Self {
            progress_status: Some(status),
            ..Self::default()
        }
    }

    /// True when the patch would not change any field
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Teacher {
    /// Build a record from a creation payload
    pub(crate) fn create(id: String, new: NewTeacher, now: DateTime<Utc>) -> Self {
        Self {
            id,
            photo: new.photo,
            name: new.name,
            nip: new.nip,
            position: new.position,
            school: new.school,
            retirement_date: new.retirement_date,
            progress_status: new.progress_status,
            document_link: new.document_link,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this record and refresh `updated_at`
    pub(crate) fn apply(&mut self, patch: TeacherPatch) {
        if let Some(photo) = patch.photo {
            self.photo = photo;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(nip) = patch.nip {
            self.nip = nip;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(school) = patch.school {
            self.school = school;
        }
        if let Some(date) = patch.retirement_date {
            self.retirement_date = date;
        }
        if let Some(status) = patch.progress_status {
            self.progress_status = status;
        }
        if let Some(link) = patch.document_link {
            self.document_link = link;
        }
        self.touch();
    }

    /// Refresh `updated_at`, keeping it strictly increasing
    pub(crate) fn touch(&mut self) {
        self.updated_at = timestamp_after(self.updated_at);
    }
}

// =============================================================================
// Ids and Clock
// =============================================================================

/// Generate a record id: `teacher_<unix millis>_<9 random chars>`
pub fn generate_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("teacher_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}

/// Current time at the millisecond precision the JSON slot keeps
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Current time, or one millisecond past `previous` if the clock hasn't moved
pub fn timestamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::milliseconds(1)
    }
}

/// Serde helper writing timestamps the way `Date.toISOString` does
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
