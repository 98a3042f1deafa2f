//! Declarative normalization rules.

use std::collections::BTreeSet;

use catalog_model::Schema;
use serde::{Deserialize, Serialize};

use crate::error::{NormalizationError, Result};

/// How a canonical value is produced from a raw record.
///
/// Every variant is total: a missing source field reads as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Derivation {
    /// Copy a raw field unchanged.
    Copy { source: String },

    /// Emit the same literal for every record.
    Constant { value: String },

    /// Numeric code prefix of a composite "code name" field.
    LeadingCode { source: String },

    /// Composite field with the numeric code prefix stripped.
    NameAfterCode { source: String },

    /// Trimmed text after the last `separator`.
    LastSegment { source: String, separator: String },

    /// Always `""`.
    Blank,
}

impl Derivation {
    /// Raw field read by this derivation, if any.
    pub fn source(&self) -> Option<&str> {
        match self {
            Derivation::Copy { source }
            | Derivation::LeadingCode { source }
            | Derivation::NameAfterCode { source }
            | Derivation::LastSegment { source, .. } => Some(source),
            Derivation::Constant { .. } | Derivation::Blank => None,
        }
    }

    /// Returns true if this derivation reads source data.
    pub fn requires_source(&self) -> bool {
        self.source().is_some()
    }
}

/// A single rule producing one canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Canonical field name written by this rule.
    pub target: String,

    /// How the value is derived.
    pub derivation: Derivation,
}

impl FieldRule {
    pub fn new(target: impl Into<String>, derivation: Derivation) -> Self {
        Self {
            target: target.into(),
            derivation,
        }
    }

    pub fn copy(target: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(
            target,
            Derivation::Copy {
                source: source.into(),
            },
        )
    }

    pub fn constant(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            target,
            Derivation::Constant {
                value: value.into(),
            },
        )
    }

    pub fn leading_code(target: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(
            target,
            Derivation::LeadingCode {
                source: source.into(),
            },
        )
    }

    pub fn name_after_code(target: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(
            target,
            Derivation::NameAfterCode {
                source: source.into(),
            },
        )
    }

    pub fn last_segment(
        target: impl Into<String>,
        source: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self::new(
            target,
            Derivation::LastSegment {
                source: source.into(),
                separator: separator.into(),
            },
        )
    }

    pub fn blank(target: impl Into<String>) -> Self {
        Self::new(target, Derivation::Blank)
    }
}

/// Ordered rules for one vendor.
///
/// The canonical schema is the rule targets in declaration order, so every
/// record normalized through the set has the same keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    name: String,
    schema: Schema,
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Builds a rule set, rejecting duplicate targets.
    pub fn new(name: impl Into<String>, rules: Vec<FieldRule>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for rule in &rules {
            if !seen.insert(rule.target.as_str()) {
                return Err(NormalizationError::DuplicateTarget(rule.target.clone()));
            }
        }
        let schema = Schema::new(rules.iter().map(|rule| rule.target.clone()))?;
        Ok(Self {
            name: name.into(),
            schema,
            rules,
        })
    }

    /// Identity rules: every raw field copied onto itself.
    pub fn passthrough(name: impl Into<String>, raw_schema: &Schema) -> Self {
        let rules = raw_schema
            .iter()
            .map(|field| FieldRule::copy(field, field))
            .collect();
        Self {
            name: name.into(),
            schema: raw_schema.clone(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical field names, in output order.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Distinct raw fields the rules read, in first-use order.
    pub fn source_fields(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = Vec::new();
        for source in self.rules.iter().filter_map(|rule| rule.derivation.source()) {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_set_schema_follows_rule_order() {
        let rules = RuleSet::new(
            "test",
            vec![
                FieldRule::copy("VendorSkuCode", "Item"),
                FieldRule::constant("Brand", "Acme"),
                FieldRule::blank("ProductDescription"),
            ],
        )
        .unwrap();
        assert_eq!(
            rules.schema().fields(),
            ["VendorSkuCode", "Brand", "ProductDescription"]
        );
        assert_eq!(rules.source_fields(), vec!["Item"]);
    }

    #[test]
    fn test_rule_set_rejects_duplicate_targets() {
        let result = RuleSet::new(
            "test",
            vec![FieldRule::copy("SizeCode", "A"), FieldRule::blank("SizeCode")],
        );
        assert_eq!(
            result.unwrap_err(),
            NormalizationError::DuplicateTarget("SizeCode".to_string())
        );
    }

    #[test]
    fn test_same_source_may_feed_several_targets() {
        let rules = RuleSet::new(
            "test",
            vec![
                FieldRule::copy("SizeCode", "Sizename"),
                FieldRule::copy("SizeName", "Sizename"),
            ],
        )
        .unwrap();
        assert_eq!(rules.source_fields(), vec!["Sizename"]);
    }

    #[test]
    fn test_passthrough_mirrors_raw_schema() {
        let raw = Schema::new(["Item", "", "Color"]).unwrap();
        let rules = RuleSet::passthrough("generic", &raw);
        assert_eq!(rules.schema(), &raw);
        assert!(rules.rules().iter().all(|rule| rule.derivation.requires_source()));
    }

    #[test]
    fn test_derivation_serde_tagging() {
        let json = serde_json::to_string(&Derivation::LastSegment {
            source: "Description".to_string(),
            separator: " - ".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"kind":"last_segment","source":"Description","separator":" - "}"#
        );
        let back: Derivation = serde_json::from_str(r#"{"kind":"blank"}"#).unwrap();
        assert_eq!(back, Derivation::Blank);
    }
}
