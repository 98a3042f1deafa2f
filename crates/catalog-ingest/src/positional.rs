//! Fixed-position row mapping for supplier files without a header row.

use catalog_model::{FieldMap, PositionalLayout, RawRecord, RawTable};

/// Maps one field array through `layout`.
///
/// Out-of-range indexes and placeholder columns read as `""`; this never
/// fails on ragged rows.
pub fn map_positional<S: AsRef<str>>(fields: &[S], layout: &PositionalLayout) -> RawRecord {
    let mut record = FieldMap::with_capacity(layout.columns().len());
    for column in layout.columns() {
        let value = column
            .index
            .and_then(|idx| fields.get(idx))
            .map(|value| value.as_ref().trim())
            .unwrap_or("");
        record.insert(column.name.as_str(), value);
    }
    RawRecord::new(record)
}

/// Maps every tokenized line; no line is treated as a header.
pub fn map_positional_lines(lines: &[Vec<String>], layout: &PositionalLayout) -> RawTable {
    let records: Vec<RawRecord> = lines
        .iter()
        .map(|fields| map_positional(fields.as_slice(), layout))
        .collect();
    if let Some(max_index) = layout.max_index() {
        let short_rows = lines.iter().filter(|fields| fields.len() <= max_index).count();
        if short_rows > 0 {
            tracing::debug!(short_rows, max_index, "positional rows shorter than layout");
        }
    }
    RawTable::new(layout.schema().clone(), records)
}
