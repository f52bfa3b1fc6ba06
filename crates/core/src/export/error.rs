//! Export error types.

use thiserror::Error;

/// Errors that can occur during CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The record set is empty; there is nothing to export.
    #[error("No data to export")]
    NoData,

    /// The destination could not be written.
    #[error("Failed to write CSV: {0}")]
    Write(#[from] csv::Error),

    /// Flushing the destination failed.
    #[error("Failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),
}
