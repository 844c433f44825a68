use async_trait::async_trait;
use uuid::Uuid;

use super::services::types::RecordDraft;
use crate::shared::errors::AppResult;

/// Persistence seam for imported records.
///
/// Each creation commits independently; there is no transactional batching
/// across a chunk, so a crash mid-chunk leaves partially-imported state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Create and persist one record, returning its identifier.
    async fn create(&self, draft: &RecordDraft) -> AppResult<Uuid>;
}

/// User-facing message channel. Fire-and-forget; no return value is
/// consumed by the pipeline.
pub trait Messenger: Send + Sync {
    fn add_status(&self, message: &str);
    fn add_warning(&self, message: &str);
    fn add_error(&self, message: &str);
}

/// Default messenger that forwards to the log facade.
pub struct LogMessenger;

impl Messenger for LogMessenger {
    fn add_status(&self, message: &str) {
        log::info!("{}", message);
    }

    fn add_warning(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn add_error(&self, message: &str) {
        log::error!("{}", message);
    }
}
