pub mod ports;
pub mod services;

// Re-exports for easy access
pub use ports::{LogMessenger, Messenger, RecordStorage};
pub use services::{ChunkedImportDriver, FinalizationReporter, RowExtractor};
