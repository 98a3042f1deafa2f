#![deny(unsafe_code)]

use serde::Serialize;

use crate::record::{CanonicalRecord, FieldMap, RawRecord};
use crate::schema::Schema;

/// A schema together with the records laid out against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table<R> {
    pub schema: Schema,
    pub records: Vec<R>,
}

pub type RawTable = Table<RawRecord>;
pub type CanonicalTable = Table<CanonicalRecord>;

impl<R: AsRef<FieldMap>> Table<R> {
    pub fn new(schema: Schema, records: Vec<R>) -> Self {
        Self { schema, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cell values of one record in schema order.
    pub fn row_values(&self, index: usize) -> Option<Vec<&str>> {
        self.records
            .get(index)
            .map(|record| record.as_ref().values_for(&self.schema))
    }
}
