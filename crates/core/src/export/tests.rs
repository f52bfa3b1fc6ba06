//! Tests for CSV export.

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use super::error::ExportError;
use super::service::CsvExporter;
use crate::processing::{ProcessedRecord, RawSubmission, SurveyProcessor};

fn records(count: usize) -> Vec<ProcessedRecord> {
    let raw: Vec<RawSubmission> = (0..count)
        .map(|i| RawSubmission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            age: Some((20 + i).to_string()),
            gender: Some(if i % 2 == 0 { "F" } else { "M" }.to_string()),
            total_income: Some((1000 * (i + 1)).to_string()),
            expenses: json!({
                "utilities": (50 + i).to_string(),
                "entertainment": "25",
                "school_fees": "0",
                "shopping": "10.5",
                "healthcare": (i * 3).to_string(),
            }),
        })
        .collect();
    SurveyProcessor::process(&raw)
}

#[test]
fn test_export_empty_records_is_a_failure_result() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.csv");

    let result = CsvExporter::export(&[], &path);
    assert!(matches!(result, Err(ExportError::NoData)));
    assert!(!path.exists());
}

#[test]
fn test_export_unwritable_destination_is_a_failure_result() {
    let result = CsvExporter::export(&records(1), std::path::Path::new("/no/such/dir/out.csv"));
    assert!(matches!(result, Err(ExportError::Write(_))));
}

#[test]
fn test_export_writes_expected_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("survey.csv");

    CsvExporter::export(&records(2), &path).expect("export");

    let contents = std::fs::read_to_string(&path).expect("read csv");
    let header = contents.lines().next().expect("header row");
    assert_eq!(
        header,
        "user_id,age,gender,total_income,submission_time,\
         utilities_expense,entertainment_expense,school_fees_expense,\
         shopping_expense,healthcare_expense,total_expenses,savings,\
         utilities_percentage,entertainment_percentage,school_fees_percentage,\
         shopping_percentage,healthcare_percentage,total_expenses_percentage"
    );
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn test_export_round_trip_preserves_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("round_trip.csv");
    let original = records(5);

    let written = CsvExporter::export(&original, &path).expect("export");
    assert_eq!(written, path);

    let mut reader = csv::Reader::from_path(&path).expect("reopen csv");
    let reparsed: Vec<ProcessedRecord> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("reparse rows");

    assert_eq!(reparsed, original);
}

#[test]
fn test_default_filename_is_timestamped() {
    let now = chrono::DateTime::parse_from_rfc3339("2026-08-29T10:30:00Z")
        .expect("timestamp")
        .with_timezone(&chrono::Utc);
    assert_eq!(
        CsvExporter::default_filename(now),
        "foster_survey_data_20260829_103000.csv"
    );
}
