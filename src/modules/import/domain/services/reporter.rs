use std::sync::Arc;

use crate::log_error;

use super::super::ports::Messenger;
use super::types::{BatchResult, Operation};

/// Summarizes a completed import run, invoked exactly once by the scheduler.
pub struct FinalizationReporter {
    messenger: Arc<dyn Messenger>,
}

impl FinalizationReporter {
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self { messenger }
    }

    /// Report the outcome of a run.
    ///
    /// On success a single summary message carries the processed count. On
    /// failure the first not-yet-executed operation is formatted into one
    /// user-visible error plus a log entry; nothing is retried and records
    /// committed before the failure stay in place.
    pub fn finish(
        &self,
        success: bool,
        results: Option<&BatchResult>,
        remaining_operations: &[Operation],
    ) {
        if success {
            let processed = results.map_or(0, |r| r.processed);
            self.messenger
                .add_status(&format!("{} items processed.", processed));
        } else if let Some(operation) = remaining_operations.first() {
            let message = format!(
                "An error occurred while processing {} with arguments: {}",
                operation.name,
                operation.arguments.join(", ")
            );
            self.messenger.add_error(&message);
            log_error!("{}", message);
        }
    }
}
