//! Delimited text serialization.

use catalog_model::{FieldMap, Schema};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{OutputError, Result};

/// When values are wrapped in double quotes.
///
/// Embedded quotes are doubled under both policies. The policy applies to
/// every record of a document; the header always uses [`QuotePolicy::Necessary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotePolicy {
    /// Quote every value.
    Always,
    /// Quote only values containing the delimiter, a quote or a line break.
    #[default]
    Necessary,
}

impl QuotePolicy {
    fn quote_style(self) -> QuoteStyle {
        match self {
            QuotePolicy::Always => QuoteStyle::Always,
            QuotePolicy::Necessary => QuoteStyle::Necessary,
        }
    }
}

/// Options for CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    pub quote_policy: QuotePolicy,
    /// Output field separator.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            quote_policy: QuotePolicy::default(),
            delimiter: b',',
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote_policy(mut self, policy: QuotePolicy) -> Self {
        self.quote_policy = policy;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn writer(&self, style: QuoteStyle, buffer: Vec<u8>) -> csv::Writer<Vec<u8>> {
        WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(style)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(buffer)
    }
}

/// Serializes records against `schema` as delimited text.
///
/// The first line holds the schema names, then one line per record with
/// values in schema order; absent fields are written empty. Lines are joined
/// with `\n` and the document has no trailing newline.
pub fn serialize<R>(records: &[R], schema: &Schema, options: &CsvOptions) -> Result<String>
where
    R: AsRef<FieldMap>,
{
    let mut header = options.writer(QuoteStyle::Necessary, Vec::new());
    header.write_record(schema.iter())?;
    let buffer = header.into_inner().map_err(|e| OutputError::Io(e.into_error()))?;

    let mut writer = options.writer(options.quote_policy.quote_style(), buffer);
    for record in records {
        writer.write_record(record.as_ref().values_for(schema))?;
    }
    let buffer = writer.into_inner().map_err(|e| OutputError::Io(e.into_error()))?;

    let mut text = String::from_utf8(buffer)?;
    if text.ends_with('\n') {
        text.pop();
    }

    tracing::debug!(
        records = records.len(),
        fields = schema.len(),
        bytes = text.len(),
        quote_policy = ?options.quote_policy,
        "serialized CSV"
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::RawRecord;

    fn schema() -> Schema {
        Schema::new(["VendorSkuCode", "ColorName"]).unwrap()
    }

    #[test]
    fn test_header_only_document() {
        let records: Vec<RawRecord> = Vec::new();
        let text = serialize(&records, &schema(), &CsvOptions::default()).unwrap();
        assert_eq!(text, "VendorSkuCode,ColorName");
    }

    #[test]
    fn test_absent_fields_are_empty() {
        let records: Vec<RawRecord> = vec![[("ColorName", "Red")].into_iter().collect()];
        let text = serialize(&records, &schema(), &CsvOptions::default()).unwrap();
        assert_eq!(text, "VendorSkuCode,ColorName\n,Red");
    }

    #[test]
    fn test_always_quotes_values_but_not_header() {
        let records: Vec<RawRecord> = vec![
            [("VendorSkuCode", "SKU1"), ("ColorName", "Say \"hi\"")]
                .into_iter()
                .collect(),
        ];
        let options = CsvOptions::new().with_quote_policy(QuotePolicy::Always);
        let text = serialize(&records, &schema(), &options).unwrap();
        assert_eq!(text, "VendorSkuCode,ColorName\n\"SKU1\",\"Say \"\"hi\"\"\"");
    }

    #[test]
    fn test_blank_header_names_keep_their_column() {
        let schema = Schema::new(["A", "", " ", "B"]).unwrap();
        let records: Vec<RawRecord> = vec![[("A", "1"), ("B", "2")].into_iter().collect()];
        let text = serialize(&records, &schema, &CsvOptions::default()).unwrap();
        assert_eq!(text, "A,, ,B\n1,,,2");
    }
}
