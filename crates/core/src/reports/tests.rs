//! Tests for survey summary statistics.

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::service::ReportService;
use crate::processing::{ProcessedRecord, RawSubmission, SurveyProcessor};

fn record(age: &str, gender: &str, income: &str, utilities: &str) -> ProcessedRecord {
    let raw = RawSubmission {
        id: Uuid::new_v4(),
        submitted_at: Utc::now(),
        age: Some(age.to_string()),
        gender: Some(gender.to_string()),
        total_income: Some(income.to_string()),
        expenses: serde_json::json!({ "utilities": utilities }),
    };
    SurveyProcessor::process(&[raw]).remove(0)
}

#[test]
fn test_summarize_empty_population_is_none() {
    assert!(ReportService::summarize(&[]).is_none());
}

#[test]
fn test_summarize_single_record() {
    let stats = ReportService::summarize(&[record("34", "F", "5000", "200")])
        .expect("non-empty population");

    assert_eq!(stats.total_respondents, 1);
    assert_eq!(stats.average_age, dec!(34));
    assert_eq!(stats.age_range.min, dec!(34));
    assert_eq!(stats.age_range.max, dec!(34));
    assert_eq!(stats.average_income, dec!(5000));
    assert_eq!(stats.average_total_expenses, dec!(200));
    assert_eq!(stats.average_savings, dec!(4800));
    assert_eq!(stats.expense_categories_avg.utilities, dec!(200));
    assert_eq!(stats.expense_categories_avg.healthcare, Decimal::ZERO);
    assert_eq!(stats.gender_distribution.get("F"), Some(&1));
}

#[test]
fn test_summarize_means_ranges_and_gender_counts() {
    let records = vec![
        record("20", "F", "1000", "100"),
        record("30", "M", "3000", "300"),
        record("40", "F", "5000", "200"),
    ];

    let stats = ReportService::summarize(&records).expect("non-empty population");

    assert_eq!(stats.total_respondents, 3);
    assert_eq!(stats.average_age, dec!(30));
    assert_eq!(stats.age_range.min, dec!(20));
    assert_eq!(stats.age_range.max, dec!(40));
    assert_eq!(stats.average_income, dec!(3000));
    assert_eq!(stats.income_range.min, dec!(1000));
    assert_eq!(stats.income_range.max, dec!(5000));
    assert_eq!(stats.average_total_expenses, dec!(200));
    assert_eq!(stats.average_savings, dec!(2800));
    assert_eq!(stats.expense_categories_avg.utilities, dec!(200));
    assert_eq!(stats.gender_distribution.get("F"), Some(&2));
    assert_eq!(stats.gender_distribution.get("M"), Some(&1));
    assert_eq!(stats.gender_distribution.len(), 2);
}

#[test]
fn test_summarize_extreme_incomes_without_aborting() {
    // Two incomes at Decimal::MAX saturate the sum instead of panicking.
    let max = "79228162514264337593543950335";
    let records = vec![record("20", "F", max, "0"), record("30", "M", max, "0")];

    let stats = ReportService::summarize(&records).expect("non-empty population");

    assert_eq!(stats.total_respondents, 2);
    assert_eq!(stats.income_range.max, Decimal::MAX);
    assert!(stats.average_income > Decimal::ZERO);
}

#[test]
fn test_summarize_all_zero_income_population() {
    let records = vec![record("20", "F", "0", "50"), record("30", "M", "0", "150")];

    let stats = ReportService::summarize(&records).expect("non-empty population");

    assert_eq!(stats.average_income, Decimal::ZERO);
    assert_eq!(stats.average_total_expenses, dec!(100));
    assert_eq!(stats.average_savings, dec!(-100));
}
