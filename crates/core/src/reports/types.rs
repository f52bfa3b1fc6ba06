//! Report data types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Smallest observed value.
    pub min: Decimal,
    /// Largest observed value.
    pub max: Decimal,
}

/// Mean expense per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAverages {
    /// Mean utilities spending.
    pub utilities: Decimal,
    /// Mean entertainment spending.
    pub entertainment: Decimal,
    /// Mean school fees spending.
    pub school_fees: Decimal,
    /// Mean shopping spending.
    pub shopping: Decimal,
    /// Mean healthcare spending.
    pub healthcare: Decimal,
}

/// Summary statistics over the processed survey population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyStats {
    /// Number of valid respondents.
    pub total_respondents: usize,
    /// Mean respondent age.
    pub average_age: Decimal,
    /// Observed age range.
    pub age_range: Range,
    /// Mean total income.
    pub average_income: Decimal,
    /// Observed income range.
    pub income_range: Range,
    /// Respondent count per gender label (order-insensitive).
    pub gender_distribution: HashMap<String, u64>,
    /// Mean total expenses.
    pub average_total_expenses: Decimal,
    /// Mean savings.
    pub average_savings: Decimal,
    /// Mean expense per category.
    pub expense_categories_avg: CategoryAverages,
}
