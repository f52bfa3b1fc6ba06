//! CSV export of processed survey records.

pub mod error;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use service::CsvExporter;
