//! Catalog data ingestion.
//!
//! Turns supplier content into raw tables: text is tokenized on the chosen
//! delimiter and mapped either by its header row or through a fixed
//! positional layout; spreadsheet rows arrive as pre-parsed records.
//!
//! # Example
//!
//! ```ignore
//! use catalog_ingest::{read_header_table, tokenize};
//! use catalog_model::Delimiter;
//!
//! let lines = tokenize("Item\tColor\nSKU1\tRed\n", Delimiter::Tab)?;
//! let table = read_header_table(&lines)?;
//! assert_eq!(table.records[0].get("Color"), Some("Red"));
//! ```

mod error;
mod header;
mod positional;
mod sheet;
mod source;
mod text;

// === Error Types ===
pub use error::{IngestError, Result};

// === Tokenizing ===
pub use text::{split_line, tokenize};

// === Row Mapping ===
pub use header::{header_schema, map_by_header, read_header_table};
pub use positional::{map_positional, map_positional_lines};

// === Spreadsheet Records ===
pub use sheet::{parse_sheet_json, read_sheet_table, sheet_table};

// === Source Files ===
pub use source::{decode_text, read_source, read_source_async};
