//! Record sink trait and output errors

use crate::extract::AnimalRecord;
use thiserror::Error;

/// Errors that can occur while emitting records
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Receives extracted records, one per successfully scraped profile.
///
/// Ownership of each record transfers to the sink at emit time; the
/// crawler never looks at a record again. Implementations are shared
/// across traversal branches and must synchronize internally.
pub trait RecordSink: Send + Sync {
    fn emit(&self, record: &AnimalRecord) -> OutputResult<()>;
}
