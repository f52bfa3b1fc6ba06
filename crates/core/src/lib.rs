//! Core business logic for the Foster Income Survey.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, coercion rules, and calculations live here.
//!
//! # Modules
//!
//! - `processing` - Flattening raw submissions into derived records
//! - `reports` - Summary statistics over processed records
//! - `export` - CSV serialization of processed records

pub mod export;
pub mod processing;
pub mod reports;
