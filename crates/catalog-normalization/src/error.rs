//! Error types for normalization.

use catalog_model::ModelError;
use thiserror::Error;

/// Errors raised while building rule sets or normalizing tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// No raw records were supplied.
    #[error("no raw records to normalize")]
    NoData,

    /// Two rules in one rule set write the same target field.
    #[error("duplicate target field '{0}' in rule set")]
    DuplicateTarget(String),

    /// A vendor key did not match any built-in profile.
    #[error("unknown vendor '{0}' (expected one of: generic, uneek, ascolour, carolinamade)")]
    UnknownVendor(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
