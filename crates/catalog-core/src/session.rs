//! The conversion session.
//!
//! A [`Session`] owns one vendor profile and walks a source through
//! `Empty -> RawLoaded -> Normalized`. Failed loads and normalizations park it
//! in [`SessionPhase::Error`]; nothing can be exported from there until a
//! successful reload.

use std::path::Path;

use catalog_ingest::{
    IngestError, decode_text, map_positional_lines, parse_sheet_json, read_header_table,
    read_source, sheet_table, tokenize,
};
use catalog_model::{CanonicalTable, Delimiter, FieldMap, RawTable, Schema};
use catalog_normalization::{SourceFormat, VendorProfile, normalize_all};
use catalog_output::ExportDocument;

use crate::error::{Result, SessionError};
use crate::options::SessionOptions;
use crate::preview::{Preview, preview_table, search_table};
use crate::state::{ContentKind, LoadOutcome, LoadTicket, SessionPhase, SourceContent};

// =============================================================================
// SESSION
// =============================================================================

/// Holds source content, the raw table and the normalized table for one
/// vendor conversion.
#[derive(Debug, Clone)]
pub struct Session {
    profile: VendorProfile,
    options: SessionOptions,
    delimiter: Delimiter,
    phase: SessionPhase,
    content: Option<SourceContent>,
    raw: Option<RawTable>,
    canonical: Option<CanonicalTable>,
    /// Bumped by every load; async completions must match it.
    load_seq: u64,
}

impl Session {
    pub fn new(profile: VendorProfile) -> Self {
        Self::with_options(profile, SessionOptions::default())
    }

    pub fn with_options(profile: VendorProfile, options: SessionOptions) -> Self {
        let delimiter = options.delimiter.unwrap_or(profile.default_delimiter);
        Self {
            profile,
            options,
            delimiter,
            phase: SessionPhase::Empty,
            content: None,
            raw: None,
            canonical: None,
            load_seq: 0,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn profile(&self) -> &VendorProfile {
        &self.profile
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn content(&self) -> Option<&SourceContent> {
        self.content.as_ref()
    }

    /// The raw table, present from a successful load until the next load.
    pub fn raw(&self) -> Option<&RawTable> {
        self.raw.as_ref()
    }

    /// The normalized table, present only in [`SessionPhase::Normalized`].
    pub fn canonical(&self) -> Option<&CanonicalTable> {
        self.canonical.as_ref()
    }

    /// Schema of the table an export would write.
    pub fn current_schema(&self) -> Option<&Schema> {
        match self.phase {
            SessionPhase::RawLoaded => self.raw.as_ref().map(|table| &table.schema),
            SessionPhase::Normalized => self.canonical.as_ref().map(|table| &table.schema),
            SessionPhase::Empty | SessionPhase::Error(_) => None,
        }
    }

    /// First `limit` rows of the current table.
    pub fn preview(&self, limit: usize) -> Result<Preview> {
        match (&self.phase, &self.raw, &self.canonical) {
            (SessionPhase::Normalized, _, Some(table)) => Ok(preview_table(table, limit)),
            (SessionPhase::RawLoaded, Some(table), _) => Ok(preview_table(table, limit)),
            _ => Err(self.invalid("preview")),
        }
    }

    /// Preview using the configured row limit.
    pub fn default_preview(&self) -> Result<Preview> {
        self.preview(self.options.preview_limit)
    }

    /// Indexes of rows in the current table containing `term`, ignoring case.
    /// An empty term matches every row.
    pub fn search(&self, term: &str) -> Result<Vec<usize>> {
        match (&self.phase, &self.raw, &self.canonical) {
            (SessionPhase::Normalized, _, Some(table)) => Ok(search_table(table, term)),
            (SessionPhase::RawLoaded, Some(table), _) => Ok(search_table(table, term)),
            _ => Err(self.invalid("search")),
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Loads delimited text.
    pub fn load_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.load_seq += 1;
        self.apply_content(SourceContent::Text(text.into()))
    }

    /// Loads spreadsheet rows handed over by the workbook decoder.
    pub fn load_sheet(&mut self, rows: Vec<FieldMap>) -> Result<()> {
        self.load_seq += 1;
        self.apply_content(SourceContent::Sheet(rows))
    }

    /// Decodes and loads delimited text bytes.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.load_text(decode_text(bytes))
    }

    /// Reads and loads a source file.
    ///
    /// `.json` files are spreadsheet records; anything else is delimited text.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let ticket = self.begin_load(path);
        let result = read_source(path);
        self.complete_load(ticket, result).map(|_| ())
    }

    /// Starts an asynchronous load of `path`.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self, path: &Path) -> LoadTicket {
        self.load_seq += 1;
        let ticket = LoadTicket {
            seq: self.load_seq,
            kind: ContentKind::for_path(path),
        };
        tracing::debug!(
            vendor = %self.profile.key,
            seq = ticket.seq,
            path = %path.display(),
            "load started"
        );
        ticket
    }

    /// Applies the result of a read started with [`Session::begin_load`].
    ///
    /// Completions for outdated tickets are dropped and leave the session
    /// unchanged.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<Vec<u8>, IngestError>,
    ) -> Result<LoadOutcome> {
        if ticket.seq != self.load_seq {
            tracing::warn!(
                vendor = %self.profile.key,
                seq = ticket.seq,
                current = self.load_seq,
                "discarding stale load completion"
            );
            return Ok(LoadOutcome::Stale);
        }

        let content = result.and_then(|bytes| {
            let text = decode_text(&bytes);
            match ticket.kind {
                ContentKind::Text => Ok(SourceContent::Text(text)),
                ContentKind::Sheet => parse_sheet_json(&text).map(SourceContent::Sheet),
            }
        });

        match content {
            Ok(content) => self.apply_content(content).map(|()| LoadOutcome::Applied),
            Err(e) => {
                self.content = None;
                self.raw = None;
                self.canonical = None;
                Err(self.fail(e.into()))
            }
        }
    }

    /// Re-parses stored text with a new delimiter, discarding normalized data.
    ///
    /// With nothing loaded the delimiter is only recorded.
    pub fn change_delimiter(&mut self, delimiter: Delimiter) -> Result<()> {
        match &self.content {
            None => {
                self.delimiter = delimiter;
                Ok(())
            }
            Some(SourceContent::Sheet(_)) => Err(SessionError::DelimiterNotApplicable),
            Some(SourceContent::Text(_)) => {
                tracing::info!(
                    vendor = %self.profile.key,
                    from = %self.delimiter,
                    to = %delimiter,
                    "changing delimiter"
                );
                self.delimiter = delimiter;
                self.reparse()
            }
        }
    }

    // =========================================================================
    // Normalize / reset / export
    // =========================================================================

    /// Applies the vendor's rules to every raw record.
    pub fn normalize(&mut self) -> Result<()> {
        if self.phase != SessionPhase::RawLoaded {
            return Err(self.invalid("normalize"));
        }
        let Some(raw) = &self.raw else {
            return Err(self.fail(IngestError::NoData.into()));
        };

        let rules = self.profile.rules_for(&raw.schema);
        match normalize_all(&rules, &raw.records) {
            Ok(table) => {
                tracing::info!(
                    vendor = %self.profile.key,
                    records = table.len(),
                    "session normalized"
                );
                self.canonical = Some(table);
                self.phase = SessionPhase::Normalized;
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Drops normalized data and returns to the raw table.
    pub fn reset(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Normalized {
            return Err(self.invalid("reset"));
        }
        self.canonical = None;
        self.phase = SessionPhase::RawLoaded;
        tracing::debug!(vendor = %self.profile.key, "session reset to raw records");
        Ok(())
    }

    /// Serializes the current table under the vendor's export file name.
    pub fn export(&self) -> Result<ExportDocument> {
        let file_name = self.profile.export_file_name.as_str();
        let csv = &self.options.csv;
        let document = match (&self.phase, &self.raw, &self.canonical) {
            (SessionPhase::Normalized, _, Some(table)) => {
                ExportDocument::from_records(file_name, &table.records, &table.schema, csv)?
            }
            (SessionPhase::RawLoaded, Some(table), _) => {
                ExportDocument::from_records(file_name, &table.records, &table.schema, csv)?
            }
            _ => return Err(self.invalid("export")),
        };
        tracing::info!(
            vendor = %self.profile.key,
            file = %document.file_name,
            phase = %self.phase,
            "export ready"
        );
        Ok(document)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn apply_content(&mut self, content: SourceContent) -> Result<()> {
        self.content = Some(content);
        self.reparse()
    }

    fn reparse(&mut self) -> Result<()> {
        self.canonical = None;
        self.raw = None;
        let parsed = match &self.content {
            Some(content) => parse_content(content, &self.profile.source, self.delimiter),
            None => Err(IngestError::EmptyInput),
        };
        match parsed {
            Ok(table) => {
                tracing::info!(
                    vendor = %self.profile.key,
                    records = table.len(),
                    fields = table.schema.len(),
                    delimiter = %self.delimiter,
                    "raw records loaded"
                );
                self.raw = Some(table);
                self.phase = SessionPhase::RawLoaded;
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Enters the error phase with `error`'s message and hands it back.
    fn fail(&mut self, error: SessionError) -> SessionError {
        let message = error.to_string();
        tracing::warn!(vendor = %self.profile.key, error = %message, "session failed");
        self.phase = SessionPhase::Error(message);
        error
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            operation,
            phase: self.phase.to_string(),
        }
    }
}

/// Builds the raw table for stored content.
///
/// Spreadsheet rows are always keyed by their own headers. Text goes through
/// the tokenizer and then the vendor's row mapper.
fn parse_content(
    content: &SourceContent,
    source: &SourceFormat,
    delimiter: Delimiter,
) -> std::result::Result<RawTable, IngestError> {
    match content {
        SourceContent::Sheet(rows) => sheet_table(rows.iter().cloned()),
        SourceContent::Text(text) => {
            let lines = tokenize(text, delimiter)?;
            match source {
                SourceFormat::PositionalText(layout) => Ok(map_positional_lines(&lines, layout)),
                SourceFormat::HeaderText | SourceFormat::SheetRecords => read_header_table(&lines),
            }
        }
    }
}
