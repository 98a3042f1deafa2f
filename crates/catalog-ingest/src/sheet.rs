//! Spreadsheet record hand-off.
//!
//! Workbook decoding happens outside this crate. The decoder hands over the
//! first sheet as a JSON array of flat objects, one per row, keyed by the
//! sheet's header cells.

use catalog_model::{FieldMap, RawRecord, RawTable, Schema};
use serde_json::{Map, Value};

use crate::error::{IngestError, Result};

/// Parses the collaborator's JSON array into ordered field maps.
///
/// Strings are trimmed, numbers and booleans keep their JSON text, and `null`
/// becomes `""`. Nested values are rejected.
pub fn parse_sheet_json(text: &str) -> Result<Vec<FieldMap>> {
    let rows: Vec<Map<String, Value>> =
        serde_json::from_str(text).map_err(|e| IngestError::SheetFormat {
            message: e.to_string(),
        })?;

    rows.into_iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let mut fields = FieldMap::with_capacity(row.len());
            for (name, value) in row {
                let text = match value {
                    Value::Null => String::new(),
                    Value::Bool(flag) => flag.to_string(),
                    Value::Number(number) => number.to_string(),
                    Value::String(text) => text.trim().to_string(),
                    Value::Array(_) | Value::Object(_) => {
                        return Err(IngestError::SheetFormat {
                            message: format!("row {} field '{name}' is not a flat value", row_idx + 1),
                        });
                    }
                };
                fields.insert(name, text);
            }
            Ok(fields)
        })
        .collect()
}

/// Lays sheet rows out against the union of their keys.
///
/// Exporters omit empty cells per row, so the schema collects names in the
/// order they are first seen across all rows. Rows without any field carry
/// nothing and are skipped.
pub fn sheet_table<I>(rows: I) -> Result<RawTable>
where
    I: IntoIterator<Item = FieldMap>,
{
    let mut names: Vec<String> = Vec::new();
    let mut records = Vec::new();
    for row in rows.into_iter().filter(|row| !row.is_empty()) {
        for name in row.names() {
            if !names.iter().any(|known| known == name) {
                names.push(name.to_string());
            }
        }
        records.push(RawRecord::new(row));
    }

    if records.is_empty() {
        return Err(IngestError::NoData);
    }

    tracing::debug!(
        columns = names.len(),
        records = records.len(),
        "collected spreadsheet records"
    );
    Ok(RawTable::new(Schema::new(names)?, records))
}

/// Parses collaborator JSON straight into a raw table.
pub fn read_sheet_table(text: &str) -> Result<RawTable> {
    sheet_table(parse_sheet_json(text)?)
}
