use std::path::Path;
use std::sync::Arc;

use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_info};

use super::super::domain::ports::{Messenger, RecordStorage};
use super::super::domain::services::{
    types::{ImportConfig, ImportJob, ImportSummary},
    ChunkedImportDriver, FinalizationReporter, RowExtractor,
};

/// Import service - unified entry point for CSV bulk imports.
///
/// Plays the scheduler role from the pipeline's point of view: it extracts
/// the rows once, then drives the chunked import to completion and invokes
/// the finalization reporter exactly once. Collaborators are injected and
/// handed down to the components that need them.
#[derive(Clone)]
pub struct ImportService {
    storage: Arc<dyn RecordStorage>,
    messenger: Arc<dyn Messenger>,
}

impl ImportService {
    pub fn new(storage: Arc<dyn RecordStorage>, messenger: Arc<dyn Messenger>) -> Self {
        Self { storage, messenger }
    }

    /// Import every row of the CSV file at `path`.
    ///
    /// Extraction failures surface as a user-visible error before any chunk
    /// runs and leave no partial state. Row-level failures never escalate:
    /// the run completes and the summary carries the error count.
    pub async fn import_file(
        &self,
        path: impl AsRef<Path>,
        config: ImportConfig,
    ) -> AppResult<ImportSummary> {
        let timer = TimedOperation::new("import_file");

        let rows = match RowExtractor::extract(&path) {
            Ok(rows) => rows,
            Err(e) => {
                LogContext::error_with_context(&e, "CSV extraction failed");
                self.messenger
                    .add_error(&format!("The CSV file could not be read: {}", e));
                return Err(e);
            }
        };

        if rows.is_empty() {
            self.messenger
                .add_warning("The CSV file contains no rows to process.");
        }

        log_info!(
            "Starting CSV import of {} rows (chunk size {})",
            rows.len(),
            config.chunk_size
        );

        let job = ImportJob::new(rows, config.chunk_size)?;
        let summary = self.run_to_completion(job, config).await;

        timer.finish_with_info(&format!(
            "{} of {} rows imported",
            summary.processed - summary.errors,
            summary.total
        ));

        Ok(summary)
    }

    /// Invoke the driver until the job reports finished, surfacing the
    /// progress message between calls, then finalize.
    async fn run_to_completion(&self, mut job: ImportJob, config: ImportConfig) -> ImportSummary {
        let driver =
            ChunkedImportDriver::new(self.storage.clone(), self.messenger.clone(), config);
        let reporter = FinalizationReporter::new(self.messenger.clone());

        while !job.finished() {
            job = driver.process_chunk(job).await;

            if let Some(message) = job.message() {
                log_debug!("{} ({:.0}% complete)", message, job.completion() * 100.0);
            }
        }

        let results = job.results().clone();
        reporter.finish(true, Some(&results), &[]);

        ImportSummary {
            processed: results.processed,
            errors: results.errors,
            total: job.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::import::domain::ports::MockRecordStorage;
    use crate::shared::errors::AppError;
    use std::io::Write;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct CapturingMessenger {
        statuses: Mutex<Vec<String>>,
        warnings: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl Messenger for CapturingMessenger {
        fn add_status(&self, message: &str) {
            self.statuses.lock().unwrap().push(message.to_string());
        }
        fn add_warning(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
        fn add_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn imports_every_row_and_reports_a_summary() {
        let mut storage = MockRecordStorage::new();
        storage
            .expect_create()
            .times(3)
            .returning(|_| Ok(Uuid::new_v4()));
        let messenger = Arc::new(CapturingMessenger::default());
        let service = ImportService::new(Arc::new(storage), messenger.clone());
        let file = write_csv("a,1\nb,2\nc,3\n");

        let summary = service
            .import_file(file.path(), ImportConfig::default())
            .await
            .unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                processed: 3,
                errors: 0,
                total: 3
            }
        );
        let statuses = messenger.statuses.lock().unwrap();
        assert_eq!(statuses.as_slice(), ["3 items processed."]);
    }

    #[tokio::test]
    async fn unreadable_file_fails_before_any_chunk() {
        let mut storage = MockRecordStorage::new();
        storage.expect_create().times(0);
        let messenger = Arc::new(CapturingMessenger::default());
        let service = ImportService::new(Arc::new(storage), messenger.clone());

        let err = service
            .import_file("/nonexistent/ducks.csv", ImportConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::SourceRead(_)));
        assert_eq!(messenger.errors.lock().unwrap().len(), 1);
        assert!(messenger.statuses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_file_warns_and_completes() {
        let mut storage = MockRecordStorage::new();
        storage.expect_create().times(0);
        let messenger = Arc::new(CapturingMessenger::default());
        let service = ImportService::new(Arc::new(storage), messenger.clone());
        let file = write_csv("");

        let summary = service
            .import_file(file.path(), ImportConfig::default())
            .await
            .unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                processed: 0,
                errors: 0,
                total: 0
            }
        );
        assert_eq!(messenger.warnings.lock().unwrap().len(), 1);
        let statuses = messenger.statuses.lock().unwrap();
        assert_eq!(statuses.as_slice(), ["0 items processed."]);
    }
}
