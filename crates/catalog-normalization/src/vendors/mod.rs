//! Built-in supplier profiles.
//!
//! A profile binds a source format, a default delimiter, a rule set and the
//! export file name. The shared pipeline does the rest.

mod ascolour;
mod carolina_made;
mod generic;
mod uneek;

use std::fmt;
use std::str::FromStr;

use catalog_model::{Delimiter, PositionalLayout, Schema};
use serde::{Deserialize, Serialize};

use crate::error::{NormalizationError, Result};
use crate::types::RuleSet;

/// Shape of the content a vendor supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SourceFormat {
    /// Delimited text whose first line is the header.
    HeaderText,
    /// Delimited text with no header; every line is data.
    PositionalText(PositionalLayout),
    /// Spreadsheet rows handed over as records. Text input for these vendors
    /// is mapped by its header row.
    SheetRecords,
}

impl SourceFormat {
    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::HeaderText => "header text",
            SourceFormat::PositionalText(_) => "positional text",
            SourceFormat::SheetRecords => "spreadsheet",
        }
    }
}

/// Everything the pipeline needs to convert one vendor's files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorProfile {
    /// Short key used on the command line.
    pub key: String,
    pub display_name: String,
    pub source: SourceFormat,
    pub default_delimiter: Delimiter,
    /// Fixed rules, or `None` to export the raw table under its own header.
    pub rules: Option<RuleSet>,
    pub export_file_name: String,
}

impl VendorProfile {
    /// A header-text profile around caller-supplied rules.
    pub fn custom(key: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            key: key.into(),
            display_name: rules.name().to_string(),
            source: SourceFormat::HeaderText,
            default_delimiter: Delimiter::Tab,
            rules: Some(rules),
            export_file_name: "converted_data.csv".to_string(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_source(mut self, source: SourceFormat) -> Self {
        self.source = source;
        self
    }

    pub fn with_default_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.default_delimiter = delimiter;
        self
    }

    pub fn with_export_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.export_file_name = file_name.into();
        self
    }

    /// Rule set to apply to a raw table with `raw_schema`.
    pub fn rules_for(&self, raw_schema: &Schema) -> RuleSet {
        match &self.rules {
            Some(rules) => rules.clone(),
            None => RuleSet::passthrough(self.key.as_str(), raw_schema),
        }
    }

    /// Canonical schema when the rules are fixed.
    pub fn canonical_schema(&self) -> Option<&Schema> {
        self.rules.as_ref().map(RuleSet::schema)
    }
}

/// The built-in vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Generic,
    Uneek,
    AsColour,
    CarolinaMade,
}

impl Vendor {
    pub const ALL: [Vendor; 4] = [
        Vendor::Generic,
        Vendor::Uneek,
        Vendor::AsColour,
        Vendor::CarolinaMade,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Vendor::Generic => "generic",
            Vendor::Uneek => "uneek",
            Vendor::AsColour => "ascolour",
            Vendor::CarolinaMade => "carolinamade",
        }
    }

    pub fn profile(self) -> Result<VendorProfile> {
        match self {
            Vendor::Generic => Ok(generic::profile()),
            Vendor::Uneek => uneek::profile(),
            Vendor::AsColour => ascolour::profile(),
            Vendor::CarolinaMade => carolina_made::profile(),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Vendor {
    type Err = NormalizationError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Vendor::ALL
            .into_iter()
            .find(|vendor| vendor.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NormalizationError::UnknownVendor(s.to_string()))
    }
}

/// Profiles for every built-in vendor, in [`Vendor::ALL`] order.
pub fn builtin_profiles() -> Result<Vec<VendorProfile>> {
    Vendor::ALL.into_iter().map(Vendor::profile).collect()
}
