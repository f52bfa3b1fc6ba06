//! `SeaORM` entity definitions.

pub mod survey_responses;
