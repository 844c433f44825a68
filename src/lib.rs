pub mod modules;
pub mod shared;

// Re-exports for consumers that only need the pipeline surface
pub use modules::import::{
    BatchResult, ChunkedImportDriver, FinalizationReporter, ImportConfig, ImportJob,
    ImportService, ImportSummary, LogMessenger, Messenger, Operation, RecordDraft,
    RecordStorage, Row, RowExtractor,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;
