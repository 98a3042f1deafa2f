#![deny(unsafe_code)]

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::schema::Schema;

/// An ordered mapping from field name to string value.
///
/// Re-inserting an existing name replaces the value in place, so a field keeps
/// the position it was first seen at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    fields: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a value and returns the one it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some((_, slot)) = self.fields.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(slot, value));
        }
        self.fields.push((name, value));
        None
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value for `name`, or `""` when the field is absent.
    pub fn value_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(key, _)| key == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Values laid out in schema order; absent fields read as `""`.
    pub fn values_for<'a>(&'a self, schema: &'a Schema) -> Vec<&'a str> {
        schema.iter().map(|name| self.value_or_empty(name)).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = FieldMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// A source row keyed by the names its mapper assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(FieldMap);

impl RawRecord {
    pub fn new(fields: FieldMap) -> Self {
        Self(fields)
    }

    pub fn into_fields(self) -> FieldMap {
        self.0
    }
}

impl Deref for RawRecord {
    type Target = FieldMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<FieldMap> for RawRecord {
    fn as_ref(&self) -> &FieldMap {
        &self.0
    }
}

impl From<FieldMap> for RawRecord {
    fn from(fields: FieldMap) -> Self {
        Self(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A normalized row whose keys are exactly a vendor schema, in order.
///
/// The only constructor pairs values with a [`Schema`], so two records built
/// against the same schema always share the same key sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalRecord(FieldMap);

impl CanonicalRecord {
    pub fn from_values(schema: &Schema, values: Vec<String>) -> Result<Self, ModelError> {
        if values.len() != schema.len() {
            return Err(ModelError::SchemaMismatch {
                expected: schema.len(),
                actual: values.len(),
            });
        }
        let mut fields = FieldMap::with_capacity(schema.len());
        // Schema names are unique, so every insert appends.
        for (name, value) in schema.iter().zip(values) {
            fields.insert(name, value);
        }
        Ok(Self(fields))
    }

    /// Builds a record by asking `value_for` for each schema field in order.
    pub fn from_fn<F>(schema: &Schema, mut value_for: F) -> Self
    where
        F: FnMut(usize, &str) -> String,
    {
        let mut fields = FieldMap::with_capacity(schema.len());
        for (idx, name) in schema.iter().enumerate() {
            let value = value_for(idx, name);
            fields.insert(name, value);
        }
        Self(fields)
    }

    pub fn into_fields(self) -> FieldMap {
        self.0
    }
}

impl Deref for CanonicalRecord {
    type Target = FieldMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<FieldMap> for CanonicalRecord {
    fn as_ref(&self) -> &FieldMap {
        &self.0
    }
}
