//! Tests for the Filter Engine
//!
//! These tests verify:
//! - Default criteria are the identity
//! - Case-insensitive text search across fields
//! - Inclusive date bounds
//! - Status filtering
//! - Combined criteria and order preservation

use chrono::{NaiveDate, TimeZone, Utc};
use retiretrack::query::{filter, FilterCriteria, StatusFilter};
use retiretrack::{ProgressStatus, Teacher};

// =============================================================================
// Helper Functions
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn teacher(id: &str, name: &str, nip: &str, school: &str, retires: NaiveDate, status: ProgressStatus) -> Teacher {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Teacher {
        id: id.to_string(),
        photo: "data:image/png;base64,AA==".to_string(),
        name: name.to_string(),
        nip: nip.to_string(),
        position: "Guru Bahasa".to_string(),
        school: school.to_string(),
        retirement_date: retires,
        progress_status: status,
        document_link: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

fn sample() -> Vec<Teacher> {
    vec![
        teacher("t1", "Smith", "19650101", "SD Negeri 1", date(2025, 1, 15), ProgressStatus::NotSubmitted),
        teacher("t2", "Ani Wijaya", "19660202", "SMP Negeri 4", date(2025, 6, 30), ProgressStatus::InProgress),
        teacher("t3", "Budi", "19670303", "SD Negeri 1", date(2026, 2, 1), ProgressStatus::Approved),
        teacher("t4", "Cici", "19680404", "SMA Negeri 7", date(2027, 9, 9), ProgressStatus::Rejected),
    ]
}

fn ids(records: &[&Teacher]) -> Vec<String> {
    records.iter().map(|t| t.id.clone()).collect()
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_default_criteria_is_identity() {
    let records = sample();

    let result = filter(&records, &FilterCriteria::default());

    assert_eq!(ids(&result), vec!["t1", "t2", "t3", "t4"]);
    assert!(!FilterCriteria::default().is_active());
}

#[test]
fn test_empty_input() {
    let records: Vec<Teacher> = Vec::new();
    let criteria = FilterCriteria {
        search_text: "anything".to_string(),
        ..FilterCriteria::default()
    };

    assert!(filter(&records, &criteria).is_empty());
}

// =============================================================================
// Text Search
// =============================================================================

#[test]
fn test_search_is_case_insensitive() {
    let records = sample();
    let criteria = FilterCriteria {
        search_text: "smith".to_string(),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t1"]);

    let criteria = FilterCriteria {
        search_text: "SMITH".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&records, &criteria)), vec!["t1"]);
}

#[test]
fn test_search_matches_nip_substring() {
    let records = sample();
    let criteria = FilterCriteria {
        search_text: "0303".to_string(),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t3"]);
}

#[test]
fn test_search_matches_school_and_position() {
    let records = sample();

    let by_school = FilterCriteria {
        search_text: "sd negeri".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&records, &by_school)), vec!["t1", "t3"]);

    let by_position = FilterCriteria {
        search_text: "bahasa".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(filter(&records, &by_position).len(), 4);
}

#[test]
fn test_search_matches_status_label() {
    let records = sample();
    let criteria = FilterCriteria {
        search_text: "disetujui".to_string(),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t3"]);
}

#[test]
fn test_search_without_match() {
    let records = sample();
    let criteria = FilterCriteria {
        search_text: "zzz".to_string(),
        ..FilterCriteria::default()
    };

    assert!(filter(&records, &criteria).is_empty());
}

// =============================================================================
// Date Range
// =============================================================================

#[test]
fn test_date_range_is_inclusive_at_both_ends() {
    let records = sample();
    let criteria = FilterCriteria {
        start_date: Some(date(2025, 1, 15)),
        end_date: Some(date(2026, 2, 1)),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t1", "t2", "t3"]);
}

#[test]
fn test_start_date_only() {
    let records = sample();
    let criteria = FilterCriteria {
        start_date: Some(date(2025, 6, 30)),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t2", "t3", "t4"]);
}

#[test]
fn test_end_date_only() {
    let records = sample();
    let criteria = FilterCriteria {
        end_date: Some(date(2025, 6, 29)),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t1"]);
}

#[test]
fn test_single_day_range() {
    let records = sample();
    let criteria = FilterCriteria {
        start_date: Some(date(2027, 9, 9)),
        end_date: Some(date(2027, 9, 9)),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t4"]);
}

// =============================================================================
// Status
// =============================================================================

#[test]
fn test_status_filter_exact() {
    let records = sample();
    let criteria = FilterCriteria {
        status: StatusFilter::Only(ProgressStatus::InProgress),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t2"]);
    assert!(criteria.is_active());
}

// =============================================================================
// Combined
// =============================================================================

#[test]
fn test_all_criteria_must_hold() {
    let records = sample();
    let criteria = FilterCriteria {
        search_text: "negeri 1".to_string(),
        start_date: Some(date(2025, 2, 1)),
        end_date: None,
        status: StatusFilter::Only(ProgressStatus::Approved),
    };

    assert_eq!(ids(&filter(&records, &criteria)), vec!["t3"]);

    let criteria = FilterCriteria {
        status: StatusFilter::Only(ProgressStatus::NotSubmitted),
        ..criteria
    };
    assert!(filter(&records, &criteria).is_empty());
}

#[test]
fn test_filter_does_not_mutate_input() {
    let records = sample();
    let before = records.clone();
    let criteria = FilterCriteria {
        search_text: "budi".to_string(),
        ..FilterCriteria::default()
    };

    let _ = filter(&records, &criteria);

    assert_eq!(records, before);
}
