//! Tests for the Statistics Aggregator

use chrono::{NaiveDate, TimeZone, Utc};
use retiretrack::query::Statistics;
use retiretrack::{ProgressStatus, Teacher};

// =============================================================================
// Helper Functions
// =============================================================================

fn teacher(id: &str, retires: NaiveDate, status: ProgressStatus) -> Teacher {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Teacher {
        id: id.to_string(),
        photo: "data:image/png;base64,AA==".to_string(),
        name: format!("Guru {}", id),
        nip: "12345678".to_string(),
        position: "Guru".to_string(),
        school: "SD".to_string(),
        retirement_date: retires,
        progress_status: status,
        document_link: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_status_counts_only_present_statuses() {
    let records = vec![
        teacher("1", date(2025, 1, 1), ProgressStatus::NotSubmitted),
        teacher("2", date(2025, 1, 1), ProgressStatus::InProgress),
        teacher("3", date(2025, 1, 1), ProgressStatus::NotSubmitted),
    ];

    let stats = Statistics::compute(&records, 3, date(2025, 6, 1));

    assert_eq!(stats.total, 3);
    assert_eq!(stats.status_counts.len(), 2);
    assert_eq!(stats.status_counts[&ProgressStatus::NotSubmitted], 2);
    assert_eq!(stats.status_counts[&ProgressStatus::InProgress], 1);
    assert!(!stats.status_counts.contains_key(&ProgressStatus::Approved));
    assert_eq!(stats.count(ProgressStatus::Rejected), 0);
}

#[test]
fn test_retiring_this_year() {
    let records = vec![
        teacher("1", date(2025, 1, 1), ProgressStatus::NotSubmitted),
        teacher("2", date(2025, 12, 31), ProgressStatus::Approved),
        teacher("3", date(2024, 12, 31), ProgressStatus::Approved),
        teacher("4", date(2026, 1, 1), ProgressStatus::Rejected),
    ];

    let stats = Statistics::compute(&records, 4, date(2025, 3, 10));

    assert_eq!(stats.retiring_this_year, 2);
}

#[test]
fn test_filtered_is_caller_supplied() {
    let records = vec![teacher("1", date(2025, 1, 1), ProgressStatus::NotSubmitted)];

    let stats = Statistics::compute(&records, 0, date(2025, 1, 1));

    assert_eq!(stats.total, 1);
    assert_eq!(stats.filtered, 0);
}

#[test]
fn test_empty_store() {
    let stats = Statistics::compute(&[], 0, date(2025, 1, 1));

    assert_eq!(stats, Statistics::default());
}
