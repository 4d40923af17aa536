//! Form Validation
//!
//! Checks a submitted teacher form and turns it into a creation payload.
//!
//! Every field is checked independently and all problems are reported
//! together, so the form can show each one at once. Messages are the
//! product's user-facing (Indonesian) strings.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use chrono::{DateTime, NaiveDate};
use url::Url;

use crate::error::{Result, TrackerError};
use crate::record::{NewTeacher, ProgressStatus};

/// Largest photo accepted by default (5 MB)
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Photo mime types the form accepts
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

// =============================================================================
// Form Input
// =============================================================================

/// A photo picked in the form, before encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a photo from disk, inferring the mime type from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .map_err(|e| TrackerError::Photo(format!("{}: {}", path.display(), e)))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let mime_type = match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            _ => "application/octet-stream",
        };

        Ok(Self::new(file_name, mime_type, bytes))
    }

    /// Check type and size, returning the user-facing message on failure
    pub fn check(&self, max_bytes: usize) -> std::result::Result<(), String> {
        if !ACCEPTED_IMAGE_TYPES.contains(&self.mime_type.as_str()) {
            return Err("Format file tidak didukung. Gunakan JPG, PNG, atau WebP.".to_string());
        }
        if self.bytes.len() > max_bytes {
            return Err(format!(
                "Ukuran file terlalu besar. Maksimal {}MB.",
                max_bytes / (1024 * 1024)
            ));
        }
        Ok(())
    }

    /// Encode as `data:<mime>;base64,<payload>`
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, B64.encode(&self.bytes))
    }
}

/// Raw values as submitted by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherForm {
    pub photo: Option<PhotoUpload>,
    pub name: String,
    pub nip: String,
    pub position: String,
    pub school: String,
    pub retirement_date: String,
    pub document_link: String,
}

impl TeacherForm {
    /// Trimmed creation payload with the default status
    ///
    /// Call after `validate`; an unparseable date is still rejected here.
    pub fn into_new_teacher(self, photo_data_uri: String) -> Result<NewTeacher> {
        let retirement_date = parse_date(&self.retirement_date).ok_or_else(|| {
            let mut report = ValidationReport::default();
            report.insert(FormField::RetirementDate, "Format tanggal tidak valid");
            TrackerError::Validation(report)
        })?;

        let link = self.document_link.trim();

        Ok(NewTeacher {
            photo: photo_data_uri,
            name: self.name.trim().to_string(),
            nip: self.nip.trim().to_string(),
            position: self.position.trim().to_string(),
            school: self.school.trim().to_string(),
            retirement_date,
            progress_status: ProgressStatus::NotSubmitted,
            document_link: (!link.is_empty()).then(|| link.to_string()),
        })
    }
}

// =============================================================================
// Validation Result
// =============================================================================

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Photo,
    Name,
    Nip,
    Position,
    School,
    RetirementDate,
    DocumentLink,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Photo => "photo",
            FormField::Name => "name",
            FormField::Nip => "nip",
            FormField::Position => "position",
            FormField::School => "school",
            FormField::RetirementDate => "retirementDate",
            FormField::DocumentLink => "documentLink",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-to-message map; valid when empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<FormField, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }

    /// Message for one field, if it failed
    pub fn message(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Validate with the default photo size limit
pub fn validate(form: &TeacherForm) -> ValidationReport {
    validate_with_limit(form, MAX_PHOTO_BYTES)
}

/// Validate every field, collecting all errors
pub fn validate_with_limit(form: &TeacherForm, max_photo_bytes: usize) -> ValidationReport {
    let mut report = ValidationReport::default();

    let name = form.name.trim();
    if name.is_empty() {
        report.insert(FormField::Name, "Nama wajib diisi");
    } else if name.chars().count() < 2 {
        report.insert(FormField::Name, "Nama minimal 2 karakter");
    }

    let nip = form.nip.trim();
    if nip.is_empty() {
        report.insert(FormField::Nip, "NIP wajib diisi");
    } else if !nip.chars().all(|c| c.is_ascii_digit()) {
        report.insert(FormField::Nip, "NIP harus berupa angka");
    } else if nip.len() < 8 {
        report.insert(FormField::Nip, "NIP minimal 8 digit");
    }

    if form.position.trim().is_empty() {
        report.insert(FormField::Position, "Jabatan wajib diisi");
    }

    if form.school.trim().is_empty() {
        report.insert(FormField::School, "Nama sekolah wajib diisi");
    }

    if form.retirement_date.trim().is_empty() {
        report.insert(FormField::RetirementDate, "Tanggal pensiun wajib diisi");
    } else if parse_date(&form.retirement_date).is_none() {
        report.insert(FormField::RetirementDate, "Format tanggal tidak valid");
    }

    match &form.photo {
        None => report.insert(FormField::Photo, "Foto guru wajib diupload"),
        Some(photo) => {
            if let Err(message) = photo.check(max_photo_bytes) {
                report.insert(FormField::Photo, message);
            }
        }
    }

    let link = form.document_link.trim();
    if !link.is_empty() && !is_valid_url(link) {
        report.insert(FormField::DocumentLink, "URL dokumen tidak valid");
    }

    report
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 date-time
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Absolute http(s) URL
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
