//! Survey processing data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raw survey submission as read back from the record store.
///
/// Fields are kept exactly as submitted: optional free text for the
/// demographic and income fields, and an unvalidated JSON document for the
/// expense mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSubmission {
    /// Store-assigned unique identifier.
    pub id: Uuid,
    /// Creation timestamp assigned by the store.
    pub submitted_at: DateTime<Utc>,
    /// Respondent age, as submitted.
    pub age: Option<String>,
    /// Respondent gender label, as submitted.
    pub gender: Option<String>,
    /// Total monthly income, as submitted.
    pub total_income: Option<String>,
    /// Expense mapping, as submitted (values may be strings, numbers, or null).
    pub expenses: serde_json::Value,
}

/// The flattened, validated, derived-field view of a raw submission.
///
/// Computed fresh for each export or report call and never persisted.
/// Field order matches the CSV column order exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// Store-assigned identifier of the underlying submission.
    pub user_id: Uuid,
    /// Respondent age.
    #[serde(with = "rust_decimal::serde::str")]
    pub age: Decimal,
    /// Respondent gender label.
    pub gender: String,
    /// Total monthly income.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_income: Decimal,
    /// Submission timestamp.
    pub submission_time: DateTime<Utc>,
    /// Utilities spending.
    #[serde(with = "rust_decimal::serde::str")]
    pub utilities_expense: Decimal,
    /// Entertainment spending.
    #[serde(with = "rust_decimal::serde::str")]
    pub entertainment_expense: Decimal,
    /// School fees spending.
    #[serde(with = "rust_decimal::serde::str")]
    pub school_fees_expense: Decimal,
    /// Shopping spending.
    #[serde(with = "rust_decimal::serde::str")]
    pub shopping_expense: Decimal,
    /// Healthcare spending.
    #[serde(with = "rust_decimal::serde::str")]
    pub healthcare_expense: Decimal,
    /// Sum of the five expense categories.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_expenses: Decimal,
    /// Income minus total expenses (may be negative).
    #[serde(with = "rust_decimal::serde::str")]
    pub savings: Decimal,
    /// Utilities spending as a percentage of income.
    #[serde(with = "rust_decimal::serde::str")]
    pub utilities_percentage: Decimal,
    /// Entertainment spending as a percentage of income.
    #[serde(with = "rust_decimal::serde::str")]
    pub entertainment_percentage: Decimal,
    /// School fees spending as a percentage of income.
    #[serde(with = "rust_decimal::serde::str")]
    pub school_fees_percentage: Decimal,
    /// Shopping spending as a percentage of income.
    #[serde(with = "rust_decimal::serde::str")]
    pub shopping_percentage: Decimal,
    /// Healthcare spending as a percentage of income.
    #[serde(with = "rust_decimal::serde::str")]
    pub healthcare_percentage: Decimal,
    /// Total expenses as a percentage of income.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_expenses_percentage: Decimal,
}
