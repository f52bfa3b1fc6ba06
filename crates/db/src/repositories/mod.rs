//! Repository abstractions for data access.

pub mod survey;

pub use survey::{NewSubmission, SurveyRepository};
