//! Value derivations shared by the built-in vendor rules.
//!
//! Each function is total over its input. Malformed text degrades to an empty
//! or unchanged value, never to an error.

/// Splits a composite "code name" field.
///
/// The code is the first whitespace-delimited token when that token is all
/// ASCII digits; the name is the remainder with surrounding whitespace
/// removed. Without a numeric leading token the code is empty and the whole
/// trimmed field is the name.
pub fn split_code_and_name(field: &str) -> (String, String) {
    let trimmed = field.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("");

    if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
        let rest = parts.next().unwrap_or("").trim();
        (first.to_string(), rest.to_string())
    } else {
        (String::new(), trimmed.to_string())
    }
}

/// Numeric code prefix of a composite field, or `""`.
pub fn leading_code(field: &str) -> String {
    split_code_and_name(field).0
}

/// Composite field with its numeric code prefix stripped.
pub fn name_after_code(field: &str) -> String {
    split_code_and_name(field).1
}

/// Text after the last occurrence of `separator`, trimmed.
///
/// Returns the whole trimmed field when the separator does not occur or is
/// empty. A trailing separator yields `""`.
pub fn last_segment(field: &str, separator: &str) -> String {
    if separator.is_empty() {
        return field.trim().to_string();
    }
    field
        .rsplit(separator)
        .next()
        .unwrap_or(field)
        .trim()
        .to_string()
}
