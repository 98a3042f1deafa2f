//! Export documents.

use std::path::{Path, PathBuf};

use catalog_model::{FieldMap, Schema};

use crate::csv_text::{CsvOptions, serialize};
use crate::error::{OutputError, Result};

/// Serialized text paired with the file name it is offered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub contents: String,
}

impl ExportDocument {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Serializes `records` into a document named `file_name`.
    pub fn from_records<R>(
        file_name: impl Into<String>,
        records: &[R],
        schema: &Schema,
        options: &CsvOptions,
    ) -> Result<Self>
    where
        R: AsRef<FieldMap>,
    {
        let contents = serialize(records, schema, options)?;
        Ok(Self::new(file_name, contents))
    }

    /// Writes the document into `dir`, returning the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.contents.as_bytes()).map_err(|e| OutputError::Write {
            path: path.clone(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), bytes = self.contents.len(), "wrote export");
        Ok(path)
    }
}
