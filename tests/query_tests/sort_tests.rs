//! Tests for the Sort Engine
//!
//! These tests verify:
//! - Case-insensitive string ordering
//! - Instant ordering for date fields
//! - Stability in both directions
//! - Header-click toggling
//! - Field name parsing

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use retiretrack::query::{sort, SortConfig, SortDirection, SortField};
use retiretrack::{ProgressStatus, Teacher};

// =============================================================================
// Helper Functions
// =============================================================================

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

fn teacher(id: &str, name: &str, school: &str, retires: (i32, u32, u32)) -> Teacher {
    Teacher {
        id: id.to_string(),
        photo: "data:image/png;base64,AA==".to_string(),
        name: name.to_string(),
        nip: "12345678".to_string(),
        position: "Guru".to_string(),
        school: school.to_string(),
        retirement_date: NaiveDate::from_ymd_opt(retires.0, retires.1, retires.2).unwrap(),
        progress_status: ProgressStatus::NotSubmitted,
        document_link: None,
        created_at: base_time(),
        updated_at: base_time(),
    }
}

fn names(records: &[&Teacher]) -> Vec<String> {
    records.iter().map(|t| t.name.clone()).collect()
}

fn ids(records: &[&Teacher]) -> Vec<String> {
    records.iter().map(|t| t.id.clone()).collect()
}

// =============================================================================
// String Ordering
// =============================================================================

#[test]
fn test_sort_name_case_insensitive() {
    let records = vec![
        teacher("1", "Budi", "A", (2025, 1, 1)),
        teacher("2", "ani", "A", (2025, 1, 1)),
        teacher("3", "Cici", "A", (2025, 1, 1)),
    ];

    let asc = sort(&records, SortField::Name, SortDirection::Asc);
    assert_eq!(names(&asc), vec!["ani", "Budi", "Cici"]);

    let desc = sort(&records, SortField::Name, SortDirection::Desc);
    assert_eq!(names(&desc), vec!["Cici", "Budi", "ani"]);
}

#[test]
fn test_sort_does_not_mutate_input() {
    let records = vec![
        teacher("1", "Budi", "A", (2025, 1, 1)),
        teacher("2", "ani", "A", (2025, 1, 1)),
    ];
    let before = records.clone();

    let _ = sort(&records, SortField::Name, SortDirection::Asc);

    assert_eq!(records, before);
}

#[test]
fn test_sort_status_by_label() {
    let mut a = teacher("a", "A", "S", (2025, 1, 1));
    a.progress_status = ProgressStatus::Rejected; // "Ditolak"
    let mut b = teacher("b", "B", "S", (2025, 1, 1));
    b.progress_status = ProgressStatus::NotSubmitted; // "Belum Diajukan"
    let mut c = teacher("c", "C", "S", (2025, 1, 1));
    c.progress_status = ProgressStatus::InProgress; // "Dalam Proses"
    let records = vec![a, b, c];

    let asc = sort(&records, SortField::ProgressStatus, SortDirection::Asc);

    assert_eq!(ids(&asc), vec!["b", "c", "a"]);
}

#[test]
fn test_sort_missing_document_link_first() {
    let mut linked = teacher("linked", "A", "S", (2025, 1, 1));
    linked.document_link = Some("https://example.com".to_string());
    let unlinked = teacher("unlinked", "B", "S", (2025, 1, 1));
    let records = vec![linked, unlinked];

    let asc = sort(&records, SortField::DocumentLink, SortDirection::Asc);

    assert_eq!(ids(&asc), vec!["unlinked", "linked"]);
}

// =============================================================================
// Date Ordering
// =============================================================================

#[test]
fn test_sort_retirement_date_chronological() {
    let records = vec![
        teacher("late", "A", "S", (2030, 1, 1)),
        teacher("early", "B", "S", (2024, 12, 31)),
        teacher("mid", "C", "S", (2027, 6, 15)),
    ];

    let asc = sort(&records, SortField::RetirementDate, SortDirection::Asc);
    assert_eq!(ids(&asc), vec!["early", "mid", "late"]);

    let desc = sort(&records, SortField::RetirementDate, SortDirection::Desc);
    assert_eq!(ids(&desc), vec!["late", "mid", "early"]);
}

#[test]
fn test_sort_updated_at_by_instant() {
    let mut a = teacher("a", "A", "S", (2025, 1, 1));
    a.updated_at = base_time() + Duration::hours(3);
    let mut b = teacher("b", "B", "S", (2025, 1, 1));
    b.updated_at = base_time() + Duration::milliseconds(1);
    let mut c = teacher("c", "C", "S", (2025, 1, 1));
    c.updated_at = base_time() + Duration::days(2);
    let records = vec![a, b, c];

    let asc = sort(&records, SortField::UpdatedAt, SortDirection::Asc);

    assert_eq!(ids(&asc), vec!["b", "a", "c"]);
}

// =============================================================================
// Stability
// =============================================================================

#[test]
fn test_sort_is_stable_ascending_and_descending() {
    let records = vec![
        teacher("1", "Dewi", "SD Negeri 1", (2025, 1, 1)),
        teacher("2", "Eka", "sd negeri 1", (2025, 1, 1)),
        teacher("3", "Fajar", "SD Alpha", (2025, 1, 1)),
        teacher("4", "Gita", "SD NEGERI 1", (2025, 1, 1)),
    ];

    let asc = sort(&records, SortField::School, SortDirection::Asc);
    assert_eq!(ids(&asc), vec!["3", "1", "2", "4"]);

    let desc = sort(&records, SortField::School, SortDirection::Desc);
    assert_eq!(ids(&desc), vec!["1", "2", "4", "3"]);
}

#[test]
fn test_sort_equal_dates_keep_order() {
    let records = vec![
        teacher("x", "Z", "S", (2026, 1, 1)),
        teacher("y", "Y", "S", (2026, 1, 1)),
        teacher("z", "X", "S", (2026, 1, 1)),
    ];

    let desc = sort(&records, SortField::RetirementDate, SortDirection::Desc);

    assert_eq!(ids(&desc), vec!["x", "y", "z"]);
}

// =============================================================================
// SortConfig
// =============================================================================

#[test]
fn test_request_toggles_direction() {
    let mut config = SortConfig::default();
    assert_eq!(config.field, None);

    config.request(SortField::Name);
    assert_eq!(config.field, Some(SortField::Name));
    assert_eq!(config.direction, SortDirection::Asc);

    config.request(SortField::Name);
    assert_eq!(config.direction, SortDirection::Desc);

    config.request(SortField::Name);
    assert_eq!(config.direction, SortDirection::Asc);

    config.request(SortField::Name);
    config.request(SortField::School);
    assert_eq!(config.field, Some(SortField::School));
    assert_eq!(config.direction, SortDirection::Asc);
}

#[test]
fn test_unset_config_keeps_order() {
    let records = vec![
        teacher("b", "B", "S", (2025, 1, 1)),
        teacher("a", "A", "S", (2025, 1, 1)),
    ];
    let view: Vec<&Teacher> = records.iter().collect();

    let result = SortConfig::default().apply(view);

    assert_eq!(ids(&result), vec!["b", "a"]);
}

#[test]
fn test_sort_field_parsing() {
    assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
    assert_eq!("retirementDate".parse::<SortField>().unwrap(), SortField::RetirementDate);
    assert_eq!("retirement_date".parse::<SortField>().unwrap(), SortField::RetirementDate);
    assert_eq!("UPDATEDAT".parse::<SortField>().unwrap(), SortField::UpdatedAt);
    assert!("salary".parse::<SortField>().is_err());

    assert!(SortField::CreatedAt.is_temporal());
    assert!(!SortField::Nip.is_temporal());
}
