//! Rule execution over raw records.

use catalog_model::{CanonicalRecord, CanonicalTable, FieldMap, RawRecord};

use crate::derive::{last_segment, leading_code, name_after_code};
use crate::error::{NormalizationError, Result};
use crate::types::{Derivation, RuleSet};

/// Evaluates one derivation against a raw record.
pub fn derive_value(derivation: &Derivation, raw: &FieldMap) -> String {
    match derivation {
        Derivation::Copy { source } => raw.value_or_empty(source).to_string(),
        Derivation::Constant { value } => value.clone(),
        Derivation::LeadingCode { source } => leading_code(raw.value_or_empty(source)),
        Derivation::NameAfterCode { source } => name_after_code(raw.value_or_empty(source)),
        Derivation::LastSegment { source, separator } => {
            last_segment(raw.value_or_empty(source), separator)
        }
        Derivation::Blank => String::new(),
    }
}

/// Normalizes one raw record.
///
/// The result has exactly the rule set's schema, in order. Raw fields no rule
/// reads are dropped.
pub fn normalize(rules: &RuleSet, raw: &RawRecord) -> CanonicalRecord {
    CanonicalRecord::from_fn(rules.schema(), |idx, _| {
        rules
            .rules()
            .get(idx)
            .map(|rule| derive_value(&rule.derivation, raw))
            .unwrap_or_default()
    })
}

/// Normalizes every raw record, preserving order.
pub fn normalize_all(rules: &RuleSet, records: &[RawRecord]) -> Result<CanonicalTable> {
    if records.is_empty() {
        return Err(NormalizationError::NoData);
    }

    let missing: Vec<&str> = rules
        .source_fields()
        .into_iter()
        .filter(|source| !records.iter().any(|record| record.contains(source)))
        .collect();
    if !missing.is_empty() {
        tracing::debug!(
            rule_set = rules.name(),
            ?missing,
            "source fields absent from every record, deriving from empty values"
        );
    }

    let normalized: Vec<CanonicalRecord> =
        records.iter().map(|record| normalize(rules, record)).collect();

    tracing::info!(
        rule_set = rules.name(),
        records = normalized.len(),
        fields = rules.schema().len(),
        "normalized records"
    );
    Ok(CanonicalTable::new(rules.schema().clone(), normalized))
}
