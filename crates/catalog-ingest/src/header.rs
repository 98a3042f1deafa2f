//! Header-driven row mapping.

use catalog_model::{FieldMap, RawRecord, RawTable, Schema};

use crate::error::{IngestError, Result};

/// Builds the raw schema from a header line.
///
/// A repeated name keeps the position of its first occurrence.
pub fn header_schema(header: &[String]) -> Result<Schema> {
    let mut names: Vec<&str> = Vec::with_capacity(header.len());
    for name in header {
        if names.contains(&name.as_str()) {
            tracing::warn!(column = %name, "duplicate header column, later values win");
            continue;
        }
        names.push(name);
    }
    Ok(Schema::new(names)?)
}

/// Maps each data line against `header`.
///
/// Missing trailing values become `""`; values past the header width are
/// dropped.
pub fn map_by_header(header: &[String], data_lines: &[Vec<String>]) -> Result<Vec<RawRecord>> {
    if data_lines.is_empty() {
        return Err(IngestError::NoData);
    }

    let records = data_lines
        .iter()
        .map(|line| {
            let mut fields = FieldMap::with_capacity(header.len());
            for (idx, name) in header.iter().enumerate() {
                let value = line.get(idx).map(|value| value.trim()).unwrap_or("");
                fields.insert(name.as_str(), value);
            }
            RawRecord::new(fields)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        columns = header.len(),
        records = records.len(),
        "mapped rows by header"
    );
    Ok(records)
}

/// Consumes the first tokenized line as the header and maps the rest.
pub fn read_header_table(lines: &[Vec<String>]) -> Result<RawTable> {
    let Some((header, data_lines)) = lines.split_first() else {
        return Err(IngestError::NoData);
    };
    let schema = header_schema(header)?;
    let records = map_by_header(header, data_lines)?;
    Ok(RawTable::new(schema, records))
}
