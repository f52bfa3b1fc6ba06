//! Report generation service.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::{CategoryAverages, Range, SurveyStats};
use crate::processing::ProcessedRecord;

/// Service for generating survey summary statistics.
pub struct ReportService;

impl ReportService {
    /// Computes summary statistics over a processed population.
    ///
    /// Returns `None` for an empty population; statistics are never computed
    /// over zero rows.
    #[must_use]
    pub fn summarize(records: &[ProcessedRecord]) -> Option<SurveyStats> {
        if records.is_empty() {
            return None;
        }
        let count = Decimal::from(records.len());

        // Saturating sums: an extreme population skews the means at the
        // edges of Decimal's range but never aborts the report.
        let mean = |value: fn(&ProcessedRecord) -> Decimal| -> Decimal {
            let sum = records
                .iter()
                .map(value)
                .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v));
            sum.checked_div(count).unwrap_or(sum)
        };
        let range = |value: fn(&ProcessedRecord) -> Decimal| -> Range {
            Range {
                min: records.iter().map(value).min().unwrap_or(Decimal::ZERO),
                max: records.iter().map(value).max().unwrap_or(Decimal::ZERO),
            }
        };

        let mut gender_distribution: HashMap<String, u64> = HashMap::new();
        for record in records {
            *gender_distribution.entry(record.gender.clone()).or_default() += 1;
        }

        Some(SurveyStats {
            total_respondents: records.len(),
            average_age: mean(|r| r.age),
            age_range: range(|r| r.age),
            average_income: mean(|r| r.total_income),
            income_range: range(|r| r.total_income),
            gender_distribution,
            average_total_expenses: mean(|r| r.total_expenses),
            average_savings: mean(|r| r.savings),
            expense_categories_avg: CategoryAverages {
                utilities: mean(|r| r.utilities_expense),
                entertainment: mean(|r| r.entertainment_expense),
                school_fees: mean(|r| r.school_fees_expense),
                shopping: mean(|r| r.shopping_expense),
                healthcare: mean(|r| r.healthcare_expense),
            },
        })
    }
}
