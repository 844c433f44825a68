use std::sync::Arc;

use crate::shared::errors::AppError;
use crate::shared::utils::logger::LogContext;

use super::super::ports::{Messenger, RecordStorage};
use super::types::{ImportConfig, ImportJob, Row};

/// Processes one chunk of an import job per invocation.
///
/// The driver is invoked repeatedly by a scheduler until the job reports
/// `finished`. It never spawns parallel work: rows are processed strictly in
/// order, one in-flight invocation per job. Collaborators are injected at
/// construction; nothing is reached through ambient lookup.
#[derive(Clone)]
pub struct ChunkedImportDriver {
    storage: Arc<dyn RecordStorage>,
    messenger: Arc<dyn Messenger>,
    config: ImportConfig,
}

impl ChunkedImportDriver {
    pub fn new(
        storage: Arc<dyn RecordStorage>,
        messenger: Arc<dyn Messenger>,
        config: ImportConfig,
    ) -> Self {
        Self {
            storage,
            messenger,
            config,
        }
    }

    /// Process the chunk at the job's current index and return the advanced
    /// job state.
    ///
    /// A row whose creation fails is logged, surfaced via the messenger and
    /// skipped; it still counts as attempted and never halts the chunk or
    /// the job. The chunk index advances unconditionally, so the call after
    /// the last real chunk is a no-op pass-through that flips `finished`.
    /// Calling again after that leaves the job untouched.
    pub async fn process_chunk(&self, mut job: ImportJob) -> ImportJob {
        if job.finished {
            return job;
        }

        if let Some(rows) = job.chunks.get(job.current_chunk).cloned() {
            for row in &rows {
                self.import_row(row, &mut job).await;
            }
        }

        job.current_chunk += 1;
        job.results.processed = job.processed;

        // Completion is detected explicitly: the fraction reaches exactly
        // 1.0 once every row has been attempted, and the job is finished
        // once the chunk index has run past the last chunk.
        job.completion = if job.processed == job.total {
            1.0
        } else {
            job.processed as f64 / job.total as f64
        };
        job.finished = job.current_chunk > job.chunks.len();

        job
    }

    async fn import_row(&self, row: &Row, job: &mut ImportJob) {
        let draft = self.config.draft(row);

        match self.storage.create(&draft).await {
            Ok(id) => {
                crate::log_debug!("Created record {} for row '{}'", id, row.title);
            }
            Err(e) => {
                let error = AppError::Storage(format!(
                    "failed to import row '{}': {}",
                    row.title, e
                ));
                LogContext::error_with_context(&error, "Row import failed");
                self.messenger.add_error(&error.to_string());
                job.results.errors += 1;
            }
        }

        job.processed += 1;
        job.message = Some(format!(
            "Now processing row {} of {}",
            job.processed, job.total
        ));
        LogContext::import_progress(job.processed, job.total);
    }
}
