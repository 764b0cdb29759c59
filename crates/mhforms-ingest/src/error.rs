use mhforms_core::models::document::SourceFormat;
use thiserror::Error;

/// Whole-document failures. Missing demographics are never an error.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to parse {format:?} document: {reason}")]
    ParseFailure { format: SourceFormat, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    pub(crate) fn parse(format: SourceFormat, reason: impl ToString) -> Self {
        IngestError::ParseFailure {
            format,
            reason: reason.to_string(),
        }
    }
}
