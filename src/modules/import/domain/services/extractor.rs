use std::path::Path;

use crate::log_debug;
use crate::shared::errors::{AppError, AppResult};

use super::types::Row;

/// Reads an uploaded CSV file and yields its rows in source order.
///
/// Leaf component: no collaborators besides the CSV reader. Re-invoking
/// re-reads the file from the start, which is acceptable since extraction
/// happens once per job.
pub struct RowExtractor;

impl RowExtractor {
    /// Extract every row from the file at `path`.
    ///
    /// A file that cannot be opened or parsed, or that contains a record
    /// with fewer than two cells, is terminal for the job: the error
    /// propagates without partial output and is never retried.
    pub fn extract(path: impl AsRef<Path>) -> AppResult<Vec<Row>> {
        let path = path.as_ref();
        Self::validate_extension(path)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut rows = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record?;

            match (record.get(0), record.get(1)) {
                (Some(title), Some(body)) => rows.push(Row::new(title, body)),
                _ => {
                    return Err(AppError::SourceRead(format!(
                        "row {} has fewer than two cells",
                        index + 1
                    )));
                }
            }
        }

        log_debug!("Extracted {} rows from {}", rows.len(), path.display());

        Ok(rows)
    }

    fn validate_extension(path: &Path) -> AppResult<()> {
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if supported {
            Ok(())
        } else {
            Err(AppError::InvalidInput(format!(
                "unsupported file extension for {}; supported file extensions: csv",
                path.display()
            )))
        }
    }
}
