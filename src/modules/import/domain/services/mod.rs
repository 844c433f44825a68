pub mod driver;
pub mod extractor;
pub mod reporter;
pub mod types;

pub use driver::ChunkedImportDriver;
pub use extractor::RowExtractor;
pub use reporter::FinalizationReporter;
