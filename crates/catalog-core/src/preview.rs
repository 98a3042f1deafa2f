//! Read-only views of the current table.

use catalog_model::{FieldMap, Schema, Table};

/// The first rows of a table, laid out against its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub schema: Schema,
    pub rows: Vec<Vec<String>>,
    /// Row count of the whole table.
    pub total_rows: usize,
}

impl Preview {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }
}

pub(crate) fn preview_table<R: AsRef<FieldMap>>(table: &Table<R>, limit: usize) -> Preview {
    let rows = table
        .records
        .iter()
        .take(limit)
        .map(|record| {
            record
                .as_ref()
                .values_for(&table.schema)
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    Preview {
        schema: table.schema.clone(),
        rows,
        total_rows: table.len(),
    }
}

/// Indexes of records with any value containing `term`, ignoring case.
pub(crate) fn search_table<R: AsRef<FieldMap>>(table: &Table<R>, term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            needle.is_empty()
                || record
                    .as_ref()
                    .values()
                    .any(|value| value.to_lowercase().contains(&needle))
        })
        .map(|(idx, _)| idx)
        .collect()
}
