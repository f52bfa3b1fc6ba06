//! Survey submission processing.
//!
//! Flattens raw survey submissions into `ProcessedRecord`s: coerces the
//! optional text fields to numbers, sums the expense categories, and derives
//! savings and percentage-of-income fields. Rows whose age or income cannot
//! be coerced are dropped, which changes the population used for statistics.

pub mod service;
pub mod types;


pub use service::SurveyProcessor;
pub use types::{ProcessedRecord, RawSubmission};
