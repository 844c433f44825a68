pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::ImportService;
pub use domain::{
    ChunkedImportDriver, FinalizationReporter, LogMessenger, Messenger, RecordStorage,
    RowExtractor,
};

// Re-export common types for shorter imports
pub use domain::services::types::{
    BatchResult, ImportConfig, ImportJob, ImportSummary, Operation, RecordDraft, Row,
};
