//! Fixed column layouts for header-less supplier files.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::schema::Schema;

/// One output column of a positional layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalColumn {
    /// Raw field name the column is published under.
    pub name: String,
    /// Zero-based source field index; `None` marks an always-empty placeholder.
    pub index: Option<usize>,
}

impl PositionalColumn {
    pub fn at(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
        }
    }

    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.index.is_none()
    }
}

/// Maps source field positions to raw field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionalLayout {
    columns: Vec<PositionalColumn>,
    #[serde(skip)]
    schema: Schema,
}

impl PositionalLayout {
    pub fn new(columns: Vec<PositionalColumn>) -> Result<Self, ModelError> {
        let schema = Schema::new(columns.iter().map(|column| column.name.clone()))?;
        Ok(Self { columns, schema })
    }

    pub fn columns(&self) -> &[PositionalColumn] {
        &self.columns
    }

    /// The raw schema, in layout order, including placeholders.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Highest source index the layout reads, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.columns.iter().filter_map(|column| column.index).max()
    }
}
