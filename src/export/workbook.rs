//! Workbook model
//!
//! Builds the three report sheets as plain rows of cells. Pure and
//! deterministic given the generation time, so the report layout can be
//! checked without touching the xlsx writer.
//!
//! ## Sheets
//! ```text
//! ┌───────────────────┬──────────────────────────────────────────────┐
//! │ Data Guru Pensiun │ one row per record (+ optional link column)  │
//! │ Ringkasan         │ totals, status / month / top-10 school counts│
//! │ Progress Tracking │ records grouped by status                    │
//! └───────────────────┴──────────────────────────────────────────────┘
//! ```

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use indexmap::IndexMap;

use crate::record::{ProgressStatus, Teacher};

use super::format;
use super::ExportOptions;

pub const MAIN_SHEET: &str = "Data Guru Pensiun";
pub const SUMMARY_SHEET: &str = "Ringkasan";
pub const PROGRESS_SHEET: &str = "Progress Tracking";

/// Number of schools listed in the summary breakdown
pub const TOP_SCHOOLS: usize = 10;

const MAIN_HEADERS: [&str; 9] = [
    "No",
    "Nama",
    "NIP",
    "Jabatan",
    "Nama Sekolah",
    "Tanggal Pensiun",
    "Status Progres",
    "Tanggal Dibuat",
    "Terakhir Diupdate",
];
const LINK_HEADER: &str = "Link Berkas";
const MAIN_WIDTHS: [f64; 9] = [5.0, 25.0, 20.0, 20.0, 30.0, 15.0, 15.0, 18.0, 18.0];
const LINK_WIDTH: f64 = 40.0;

const PROGRESS_HEADERS: [&str; 4] = ["Nama", "NIP", "Sekolah", "Tanggal Pensiun"];

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn count(value: usize) -> Self {
        Cell::Number(value as f64)
    }

    /// Text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            Cell::Number(_) => None,
        }
    }
}

/// One worksheet: rows of cells, column widths, and which rows are headers
#[derive(Debug, Clone, PartialEq)]
pub struct SheetModel {
    pub name: String,
    pub column_widths: Vec<f64>,

    /// Indexes of rows rendered with the header style
    pub header_rows: Vec<usize>,

    /// Rows; an empty row is a spacer
    pub rows: Vec<Vec<Cell>>,
}

impl SheetModel {
    fn new(name: &str, column_widths: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            column_widths,
            header_rows: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn push_header(&mut self, row: Vec<Cell>) {
        self.header_rows.push(self.rows.len());
        self.rows.push(row);
    }

    fn blank(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Text of the first cell of each row (empty for spacers)
    pub fn first_column(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.first().and_then(Cell::as_text).unwrap_or(""))
            .collect()
    }
}

/// The whole report
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookModel {
    pub sheets: Vec<SheetModel>,
}

impl WorkbookModel {
    /// Find a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&SheetModel> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

/// Build the report for `records`, stamped with `generated_at`
///
/// Record timestamps are rendered in `generated_at`'s time zone.
pub fn build_workbook<Tz>(
    records: &[&Teacher],
    options: &ExportOptions,
    generated_at: &DateTime<Tz>,
) -> WorkbookModel
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    WorkbookModel {
        sheets: vec![
            main_sheet(records, options, &generated_at.timezone()),
            summary_sheet(records, generated_at),
            progress_sheet(records),
        ],
    }
}

// =============================================================================
// Sheet Builders
// =============================================================================

fn main_sheet<Tz>(records: &[&Teacher], options: &ExportOptions, tz: &Tz) -> SheetModel
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut widths = MAIN_WIDTHS.to_vec();
    let mut headers: Vec<Cell> = MAIN_HEADERS.iter().map(|h| Cell::text(*h)).collect();
    if options.include_document_links {
        widths.push(LINK_WIDTH);
        headers.push(Cell::text(LINK_HEADER));
    }

    let mut sheet = SheetModel::new(MAIN_SHEET, widths);
    sheet.push_header(headers);

    for (index, teacher) in records.iter().enumerate() {
        let mut row = vec![
            Cell::count(index + 1),
            Cell::text(&teacher.name),
            Cell::text(&teacher.nip),
            Cell::text(&teacher.position),
            Cell::text(&teacher.school),
            Cell::text(format::long_date(teacher.retirement_date)),
            Cell::text(teacher.progress_status.label()),
            Cell::text(format::short_timestamp(&teacher.created_at.with_timezone(tz))),
            Cell::text(format::short_timestamp(&teacher.updated_at.with_timezone(tz))),
        ];
        if options.include_document_links {
            row.push(Cell::text(teacher.document_link.as_deref().unwrap_or("-")));
        }
        sheet.push(row);
    }

    sheet
}

fn summary_sheet<Tz>(records: &[&Teacher], generated_at: &DateTime<Tz>) -> SheetModel
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut sheet = SheetModel::new(SUMMARY_SHEET, vec![35.0, 15.0]);

    sheet.push(vec![Cell::text("RINGKASAN DATA PENSIUN GURU")]);
    sheet.blank();
    sheet.push(vec![Cell::text("Total Data Guru:"), Cell::count(records.len())]);
    sheet.blank();

    sheet.push(vec![Cell::text("BREAKDOWN STATUS PENGAJUAN")]);
    for (status, count) in status_counts(records) {
        sheet.push(vec![Cell::text(status.label()), Cell::count(count)]);
    }
    sheet.blank();

    sheet.push(vec![Cell::text("RENCANA PENSIUN PER BULAN")]);
    for (month, count) in monthly_breakdown(records) {
        sheet.push(vec![Cell::text(month), Cell::count(count)]);
    }
    sheet.blank();

    sheet.push(vec![Cell::text(format!("BREAKDOWN PER SEKOLAH (Top {})", TOP_SCHOOLS))]);
    for (school, count) in top_schools(records, TOP_SCHOOLS) {
        sheet.push(vec![Cell::text(school), Cell::count(count)]);
    }
    sheet.blank();

    sheet.push(vec![Cell::text(format!(
        "Laporan dibuat pada: {}",
        format::long_timestamp(generated_at)
    ))]);

    sheet
}

fn progress_sheet(records: &[&Teacher]) -> SheetModel {
    let mut sheet = SheetModel::new(PROGRESS_SHEET, vec![25.0, 20.0, 30.0, 15.0]);

    for (index, (status, group)) in group_by_status(records).into_iter().enumerate() {
        if index > 0 {
            sheet.blank();
        }

        sheet.push(vec![Cell::text(format!(
            "{} ({} guru)",
            status.label().to_uppercase(),
            group.len()
        ))]);
        sheet.push(PROGRESS_HEADERS.iter().map(|h| Cell::text(*h)).collect());

        for teacher in group {
            sheet.push(vec![
                Cell::text(&teacher.name),
                Cell::text(&teacher.nip),
                Cell::text(&teacher.school),
                Cell::text(format::long_date(teacher.retirement_date)),
            ]);
        }
    }

    sheet
}

// =============================================================================
// Aggregations (first-encountered order)
// =============================================================================

/// Status counts in the order statuses first appear
pub fn status_counts(records: &[&Teacher]) -> IndexMap<ProgressStatus, usize> {
    let mut counts = IndexMap::new();
    for teacher in records {
        *counts.entry(teacher.progress_status).or_insert(0) += 1;
    }
    counts
}

/// Retirements per `MMMM yyyy` month in the order months first appear
pub fn monthly_breakdown(records: &[&Teacher]) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for teacher in records {
        *counts.entry(format::month_year(teacher.retirement_date)).or_insert(0) += 1;
    }
    counts
}

/// The `limit` schools with most records, ties in first-encountered order
pub fn top_schools(records: &[&Teacher], limit: usize) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for teacher in records {
        *counts.entry(teacher.school.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(school, count)| (school.to_string(), count))
        .collect();

    // stable: equal counts keep first-encountered order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Records grouped by status, groups in first-appearance order
pub fn group_by_status<'a>(records: &[&'a Teacher]) -> IndexMap<ProgressStatus, Vec<&'a Teacher>> {
    let mut groups: IndexMap<ProgressStatus, Vec<&'a Teacher>> = IndexMap::new();
    for teacher in records {
        groups.entry(teacher.progress_status).or_default().push(*teacher);
    }
    groups
}
