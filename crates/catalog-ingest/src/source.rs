//! Reading and decoding source files.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Reads a source file into memory.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Single-shot asynchronous read of a source file.
///
/// The caller decides whether the completion is still wanted; see the
/// session's load tickets.
pub async fn read_source_async(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tokio::fs::read(path)
        .await
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Decodes source bytes as text.
///
/// A UTF-8 or UTF-16 BOM selects the encoding and is removed; otherwise the
/// bytes are read as UTF-8. Malformed sequences become U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = encoding.name(),
            "source contained malformed sequences, replaced with U+FFFD"
        );
    } else {
        tracing::debug!(encoding = encoding.name(), bytes = bytes.len(), "decoded source");
    }
    text.into_owned()
}
