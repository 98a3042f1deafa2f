//! Session phase and load bookkeeping.

use std::fmt;
use std::path::Path;

use catalog_model::FieldMap;

/// Where a session is in its load/normalize cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Empty,
    RawLoaded,
    Normalized,
    /// A load or normalize failed; the message is displayable as-is.
    Error(String),
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::Empty => "empty",
            SessionPhase::RawLoaded => "raw loaded",
            SessionPhase::Normalized => "normalized",
            SessionPhase::Error(_) => "in error",
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SessionPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Returns true if a table is available for export and preview.
    pub fn has_table(&self) -> bool {
        matches!(self, SessionPhase::RawLoaded | SessionPhase::Normalized)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source content kept by the session so it can be re-parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceContent {
    /// Delimited text, decoded.
    Text(String),
    /// Spreadsheet rows from the workbook decoder.
    Sheet(Vec<FieldMap>),
}

/// How loaded bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    /// JSON records from the spreadsheet decoder.
    Sheet,
}

impl ContentKind {
    /// `.json` files carry spreadsheet records; anything else is text.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ContentKind::Sheet,
            _ => ContentKind::Text,
        }
    }
}

/// Handle for an in-flight asynchronous load.
///
/// Only the ticket from the most recent load is honoured on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub(crate) seq: u64,
    pub(crate) kind: ContentKind,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }
}

/// Result of completing an asynchronous load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was started; the completion was discarded.
    Stale,
}
