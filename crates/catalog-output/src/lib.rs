//! Catalog export.
//!
//! Serializes raw or canonical tables as comma-separated text with a uniform
//! quoting policy, and writes the result under the vendor's export file name.

mod csv_text;
mod document;
mod error;

pub use csv_text::{CsvOptions, QuotePolicy, serialize};
pub use document::ExportDocument;
pub use error::{OutputError, Result};
