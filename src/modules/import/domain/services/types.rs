use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// One source row from the CSV file.
///
/// Only the first two cells of a source record are ever consumed, so rows
/// are modeled as a fixed two-field record instead of a variadic cell list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub title: String,
    pub body: String,
}

impl Row {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Field mapping handed to storage for one new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub record_type: String,
    pub title: String,
    pub body: String,
    pub body_format: String,
    pub published: bool,
    pub owner_id: i64,
}

/// Per-job settings: chunk size plus the fixed field values applied to
/// every record created from a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    pub chunk_size: usize,
    pub record_type: String,
    pub body_format: String,
    pub published: bool,
    pub owner_id: i64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            chunk_size: 30,
            record_type: "article".to_string(),
            body_format: "plain_text".to_string(),
            published: true,
            owner_id: 1,
        }
    }
}

impl ImportConfig {
    /// Build the storage draft for one source row.
    pub fn draft(&self, row: &Row) -> RecordDraft {
        RecordDraft {
            record_type: self.record_type.clone(),
            title: row.title.clone(),
            body: row.body.clone(),
            body_format: self.body_format.clone(),
            published: self.published,
            owner_id: self.owner_id,
        }
    }
}

/// Aggregate counters read once by the finalization reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub processed: usize,
    pub errors: usize,
}

/// Descriptor of a scheduler operation that never ran, reported on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub arguments: Vec<String>,
}

impl Operation {
    pub fn new(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Outcome of a completed import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub processed: usize,
    pub errors: usize,
    pub total: usize,
}

/// State of one import run, carried between chunk invocations.
///
/// The job is passed into `process_chunk` by value and returned transformed;
/// there is no shared mutable context between invocations. Each row is
/// attempted exactly once over the job's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportJob {
    pub(crate) chunks: Vec<Vec<Row>>,
    pub(crate) chunk_size: usize,
    pub(crate) current_chunk: usize,
    pub(crate) processed: usize,
    pub(crate) total: usize,
    pub(crate) finished: bool,
    pub(crate) completion: f64,
    pub(crate) message: Option<String>,
    pub(crate) results: BatchResult,
}

impl ImportJob {
    /// Partition the row list into fixed-size chunks and initialize progress
    /// counters. Fails for a zero chunk size.
    pub fn new(rows: Vec<Row>, chunk_size: usize) -> AppResult<Self> {
        if chunk_size == 0 {
            return Err(AppError::InvalidInput(
                "chunk size must be at least 1".to_string(),
            ));
        }

        let total = rows.len();
        let chunks = if rows.is_empty() {
            Vec::new()
        } else {
            rows.chunks(chunk_size).map(<[Row]>::to_vec).collect()
        };

        Ok(Self {
            chunks,
            chunk_size,
            current_chunk: 0,
            processed: 0,
            total,
            finished: false,
            completion: if total == 0 { 1.0 } else { 0.0 },
            message: None,
            results: BatchResult::default(),
        })
    }

    /// Rows attempted so far. Monotone non-decreasing, never exceeds `total`.
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn current_chunk(&self) -> usize {
        self.current_chunk
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// True once the driver has observed the chunk index running past the
    /// last chunk. A finished job is never processed again.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Completion fraction in [0.0, 1.0]; exactly 1.0 only when every row
    /// has been attempted.
    pub fn completion(&self) -> f64 {
        self.completion
    }

    /// Latest progress message, surfaced by the scheduler between calls.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn results(&self) -> &BatchResult {
        &self.results
    }
}
