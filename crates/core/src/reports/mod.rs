//! Summary statistics over processed survey records.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::ReportService;
pub use types::{CategoryAverages, Range, SurveyStats};
