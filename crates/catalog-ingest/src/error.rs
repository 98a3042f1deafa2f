//! Error types for catalog ingestion.

use std::path::PathBuf;

use catalog_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading and mapping source rows.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Content Errors ===
    /// Nothing but blank lines after filtering.
    #[error("no data found in file")]
    EmptyInput,

    /// A header (or nothing) but zero data rows.
    #[error("file contains no data rows")]
    NoData,

    // === File System Errors ===
    /// Failed to read the source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Spreadsheet Hand-off Errors ===
    /// Spreadsheet records were not a flat JSON array of objects.
    #[error("invalid spreadsheet records: {message}")]
    SheetFormat { message: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileRead {
            path: PathBuf::from("/path/to/catalog.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read file /path/to/catalog.txt: missing"
        );
    }

    #[test]
    fn test_error_from_model() {
        let err: IngestError = ModelError::DuplicateField("Style".to_string()).into();
        assert!(matches!(err, IngestError::Model(_)));
    }
}
