//! Vendor normalization.
//!
//! Turns raw supplier records into canonical records through declarative
//! rule sets. Each vendor is a small profile over the same pipeline.
//!
//! # Overview
//!
//! - **Derivations**: composite code splits, last-segment extraction, constants
//! - **Rule sets**: ordered `target <- derivation` lists that fix the canonical schema
//! - **Execution**: total per-record normalization; missing sources read as `""`
//! - **Profiles**: Generic, Uneek, AS Colour and Carolina Made
//!
//! # Example
//!
//! ```ignore
//! use catalog_normalization::{FieldRule, RuleSet, normalize_all};
//!
//! let rules = RuleSet::new("Acme", vec![
//!     FieldRule::copy("VendorSkuCode", "Item"),
//!     FieldRule::constant("Brand", "Acme"),
//! ])?;
//! let table = normalize_all(&rules, &raw.records)?;
//! ```

mod derive;
mod error;
mod executor;
mod types;

pub mod vendors;

// Core types
pub use types::{Derivation, FieldRule, RuleSet};

// Error type
pub use error::{NormalizationError, Result};

// Derivation functions
pub use derive::{last_segment, leading_code, name_after_code, split_code_and_name};

// Execution
pub use executor::{derive_value, normalize, normalize_all};

// Profiles
pub use vendors::{SourceFormat, Vendor, VendorProfile, builtin_profiles};
