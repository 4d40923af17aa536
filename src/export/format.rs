//! Date and filename formatting for exported spreadsheets
//!
//! Month names are Indonesian, matching the rest of the report text.

use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Indonesian month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    MONTHS[(month.clamp(1, 12) - 1) as usize]
}

/// `dd MMMM yyyy`, e.g. `05 Januari 2025`
pub fn long_date(date: NaiveDate) -> String {
    format!("{:02} {} {}", date.day(), month_name(date.month()), date.year())
}

/// `MMMM yyyy`, e.g. `Januari 2025`
pub fn month_year(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// `dd/MM/yyyy HH:mm`
pub fn short_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// `dd MMMM yyyy HH:mm`
pub fn long_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{} {}", long_date(at.date_naive()), at.format("%H:%M"))
}

/// `<prefix>_<YYYY-MM-DD_HH-mm-ss>.xlsx`
pub fn generate_export_filename<Tz>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}_{}.xlsx", prefix, at.format("%Y-%m-%d_%H-%M-%S"))
}

/// Append `.xlsx` unless the name already ends with it
pub fn ensure_xlsx_extension(name: &str) -> String {
    if name.to_lowercase().ends_with(".xlsx") {
        name.to_string()
    } else {
        format!("{}.xlsx", name)
    }
}
