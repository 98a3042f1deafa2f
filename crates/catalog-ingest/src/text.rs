//! Naive delimited-text tokenizer.
//!
//! Fields are split on the literal delimiter with no quote handling.

use catalog_model::Delimiter;

use crate::error::{IngestError, Result};

/// Splits `text` into trimmed fields per non-blank line.
///
/// Accepts `\n` and `\r\n` line endings and a leading UTF-8 BOM.
pub fn tokenize(text: &str, delimiter: Delimiter) -> Result<Vec<Vec<String>>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let separator = delimiter.as_char();
    let lines: Vec<Vec<String>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_line(line, separator))
        .collect();

    if lines.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    tracing::debug!(lines = lines.len(), delimiter = %delimiter, "tokenized text");
    Ok(lines)
}

/// Splits one line on `separator`, trimming each field.
pub fn split_line(line: &str, separator: char) -> Vec<String> {
    line.split(separator)
        .map(|field| field.trim().to_string())
        .collect()
}
