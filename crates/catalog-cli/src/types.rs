use std::path::PathBuf;

use catalog_model::{Delimiter, Schema};

/// Outcome of one `convert` run.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub vendor: String,
    pub input: PathBuf,
    pub delimiter: Delimiter,
    pub raw_fields: usize,
    pub records: usize,
    /// False when the raw table was exported as-is.
    pub normalized: bool,
    pub output_fields: usize,
    pub file_name: String,
    pub bytes: usize,
    /// Written path; `None` on a dry run.
    pub written: Option<PathBuf>,
}

/// Rows selected for display by `preview`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResult {
    pub schema: Schema,
    /// Table row index paired with the row's values in schema order.
    pub rows: Vec<(usize, Vec<String>)>,
    /// Rows matching the search term, or every row without one.
    pub matched: usize,
    pub total: usize,
}
