use catalog_ingest::IngestError;
use catalog_normalization::NormalizationError;
use catalog_output::OutputError;
use thiserror::Error;

/// Errors raised by [`crate::Session`] operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// The operation is not allowed in the current phase.
    #[error("cannot {operation} while the session is {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: String,
    },

    /// Spreadsheet records are not delimited text.
    #[error("delimiter changes do not apply to spreadsheet records")]
    DelimiterNotApplicable,
}

pub type Result<T> = std::result::Result<T, SessionError>;
