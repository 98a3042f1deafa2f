//! Session plumbing shared by the CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog_core::{Session, SessionOptions};
use catalog_normalization::Vendor;
use catalog_output::ExportDocument;
use tracing::info;

use crate::types::{ConvertResult, PreviewResult};

/// Creates a session for `vendor` and loads `input` into it.
pub fn open_session(input: &Path, vendor: Vendor, options: SessionOptions) -> Result<Session> {
    let profile = vendor.profile().context("build vendor profile")?;
    let mut session = Session::with_options(profile, options);
    session
        .load_path(input)
        .with_context(|| format!("load {}", input.display()))?;
    Ok(session)
}

/// Normalizes unless `raw` is set, then serializes the current table.
pub fn convert(session: &mut Session, raw: bool) -> Result<ExportDocument> {
    if !raw {
        session.normalize().context("normalize records")?;
    }
    session.export().context("serialize export")
}

/// Writes the export into `output_dir`, creating it when needed.
pub fn write_export(
    document: &ExportDocument,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Option<PathBuf>> {
    if dry_run {
        info!(file = %document.file_name, "dry run, export not written");
        return Ok(None);
    }
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let path = document
        .write_to(output_dir)
        .with_context(|| format!("write {}", document.file_name))?;
    Ok(Some(path))
}

/// Default export directory: next to the input file.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Collects summary numbers for a finished conversion.
pub fn summarize(
    session: &Session,
    input: &Path,
    document: &ExportDocument,
    written: Option<PathBuf>,
) -> ConvertResult {
    let raw = session.raw();
    ConvertResult {
        vendor: session.profile().display_name.clone(),
        input: input.to_path_buf(),
        delimiter: session.delimiter(),
        raw_fields: raw.map_or(0, |table| table.schema.len()),
        records: raw.map_or(0, |table| table.len()),
        normalized: session.canonical().is_some(),
        output_fields: session.current_schema().map_or(0, |schema| schema.len()),
        file_name: document.file_name.clone(),
        bytes: document.contents.len(),
        written,
    }
}

/// Selects up to `limit` rows of the current table, optionally filtered by
/// a case-insensitive search term.
pub fn preview_rows(session: &Session, limit: usize, search: Option<&str>) -> Result<PreviewResult> {
    match search {
        None => {
            let preview = session.preview(limit)?;
            Ok(PreviewResult {
                schema: preview.schema,
                rows: preview.rows.into_iter().enumerate().collect(),
                matched: preview.total_rows,
                total: preview.total_rows,
            })
        }
        Some(term) => {
            let hits = session.search(term)?;
            let full = session.preview(usize::MAX)?;
            let rows = hits
                .iter()
                .take(limit)
                .filter_map(|&idx| full.rows.get(idx).map(|row| (idx, row.clone())))
                .collect();
            Ok(PreviewResult {
                schema: full.schema,
                rows,
                matched: hits.len(),
                total: full.total_rows,
            })
        }
    }
}
