//! Survey processing service.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{ProcessedRecord, RawSubmission};

/// Flattens raw submissions into derived records.
pub struct SurveyProcessor;

impl SurveyProcessor {
    /// Processes a batch of raw submissions into `ProcessedRecord`s.
    ///
    /// Rows whose age or income is missing or non-numeric are dropped from
    /// the output (not merely zeroed). Submissions with a malformed expense
    /// document are skipped with a logged warning; processing continues for
    /// the remaining records. Empty input yields empty output.
    #[must_use]
    pub fn process(raw: &[RawSubmission]) -> Vec<ProcessedRecord> {
        let processed: Vec<ProcessedRecord> =
            raw.iter().filter_map(Self::process_one).collect();
        debug!(
            raw = raw.len(),
            valid = processed.len(),
            "Processed survey submissions"
        );
        processed
    }

    fn process_one(raw: &RawSubmission) -> Option<ProcessedRecord> {
        // Only an object (or an absent mapping) is an acceptable expense
        // document; anything else means the submission is malformed.
        let expenses = match &raw.expenses {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => {
                warn!(
                    id = %raw.id,
                    expenses = %other,
                    "Skipping submission with malformed expense document"
                );
                return None;
            }
        };

        // Age and income must coerce to numbers; otherwise the row is
        // excluded from the population entirely.
        let Some(age) = coerce_text(raw.age.as_deref()) else {
            debug!(id = %raw.id, "Dropping submission with missing or non-numeric age");
            return None;
        };
        let Some(total_income) = coerce_text(raw.total_income.as_deref()) else {
            debug!(id = %raw.id, "Dropping submission with missing or non-numeric income");
            return None;
        };

        let category = |key: &str| -> Decimal {
            expenses
                .and_then(|map| coerce_value(map.get(key)))
                .unwrap_or(Decimal::ZERO)
        };

        let expenses = [
            category("utilities"),
            category("entertainment"),
            category("school_fees"),
            category("shopping"),
            category("healthcare"),
        ];

        // The form applies no validation, so parseable values can still be
        // extreme enough to overflow the derived arithmetic. Such a
        // submission is malformed data, not a reason to abort the batch.
        let Some(record) = Self::derive_record(raw, age, total_income, expenses) else {
            warn!(
                id = %raw.id,
                "Skipping submission whose derived fields overflow"
            );
            return None;
        };
        Some(record)
    }

    /// Computes the derived fields with checked arithmetic; `None` means
    /// some derivation overflowed.
    fn derive_record(
        raw: &RawSubmission,
        age: Decimal,
        total_income: Decimal,
        expenses: [Decimal; 5],
    ) -> Option<ProcessedRecord> {
        let [utilities, entertainment, school_fees, shopping, healthcare] = expenses;

        let total_expenses = utilities
            .checked_add(entertainment)?
            .checked_add(school_fees)?
            .checked_add(shopping)?
            .checked_add(healthcare)?;
        let savings = total_income.checked_sub(total_expenses)?;

        Some(ProcessedRecord {
            user_id: raw.id,
            age,
            gender: raw.gender.clone().unwrap_or_default(),
            total_income,
            submission_time: raw.submitted_at,
            utilities_expense: utilities,
            entertainment_expense: entertainment,
            school_fees_expense: school_fees,
            shopping_expense: shopping,
            healthcare_expense: healthcare,
            total_expenses,
            savings,
            utilities_percentage: percentage_of_income(utilities, total_income)?,
            entertainment_percentage: percentage_of_income(entertainment, total_income)?,
            school_fees_percentage: percentage_of_income(school_fees, total_income)?,
            shopping_percentage: percentage_of_income(shopping, total_income)?,
            healthcare_percentage: percentage_of_income(healthcare, total_income)?,
            total_expenses_percentage: percentage_of_income(total_expenses, total_income)?,
        })
    }
}

/// Share of income spent, in percent. Zero when income is zero or negative
/// so an all-zero-income population never divides by zero; `None` when the
/// quotient itself overflows.
fn percentage_of_income(amount: Decimal, total_income: Decimal) -> Option<Decimal> {
    if total_income > Decimal::ZERO {
        amount
            .checked_div(total_income)?
            .checked_mul(Decimal::ONE_HUNDRED)
    } else {
        Some(Decimal::ZERO)
    }
}

/// Coerces an optional text field to a number.
fn coerce_text(value: Option<&str>) -> Option<Decimal> {
    value?.trim().parse().ok()
}

/// Coerces a stored expense value to a number. The store enforces no
/// schema, so both JSON strings and JSON numbers are accepted.
fn coerce_value(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
