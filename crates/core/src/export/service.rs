//! CSV export service.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use super::error::ExportError;
use crate::processing::ProcessedRecord;

/// Serializes processed records to CSV for offline analysis.
pub struct CsvExporter;

impl CsvExporter {
    /// Exports processed records to a CSV file at `path`.
    ///
    /// Writes a header row followed by one row per record, with numeric
    /// fields in plain locale-independent decimal notation. Returns the
    /// destination path on success.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NoData` when the record set is empty and a
    /// write error when the destination cannot be written.
    pub fn export(records: &[ProcessedRecord], path: &Path) -> Result<PathBuf, ExportError> {
        if records.is_empty() {
            return Err(ExportError::NoData);
        }

        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!(
            records = records.len(),
            path = %path.display(),
            "Exported survey records to CSV"
        );
        Ok(path.to_path_buf())
    }

    /// Default timestamped export filename.
    #[must_use]
    pub fn default_filename(now: DateTime<Utc>) -> String {
        format!("foster_survey_data_{}.csv", now.format("%Y%m%d_%H%M%S"))
    }
}
