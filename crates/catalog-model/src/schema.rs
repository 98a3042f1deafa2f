//! Ordered column schemas.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An ordered, duplicate-free sequence of field names.
///
/// Names may be empty or whitespace-only: positional supplier formats carry
/// structurally blank columns that still occupy an output position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    pub fn new<I, S>(names: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = BTreeSet::new();
        for name in &fields {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateField(name.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field == name)
    }
}

impl TryFrom<Vec<String>> for Schema {
    type Error = ModelError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Schema> for Vec<String> {
    fn from(schema: Schema) -> Self {
        schema.fields
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_names() {
        let err = Schema::new(["A", "B", "A"]).unwrap_err();
        assert_eq!(err, ModelError::DuplicateField("A".to_string()));
    }

    #[test]
    fn blank_placeholders_are_distinct_names() {
        let schema = Schema::new(["Case Wt.", "", " ", "Currency"]).unwrap();
        assert_eq!(schema.len(), 4);
        assert_eq!(schema.position(" "), Some(2));
        assert_eq!(schema.to_string(), "Case Wt.,, ,Currency");
    }
}
