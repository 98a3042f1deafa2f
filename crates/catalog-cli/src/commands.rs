use std::time::Instant;

use anyhow::{Context, Result};
use catalog_core::SessionOptions;
use catalog_normalization::builtin_profiles;
use catalog_output::{CsvOptions, QuotePolicy};
use tracing::{info, info_span};

use catalog_cli::pipeline::{
    convert, default_output_dir, open_session, preview_rows, summarize, write_export,
};
use catalog_cli::types::ConvertResult;

use crate::cli::{ConvertArgs, PreviewArgs, SourceArgs};
use crate::summary::{print_preview, print_vendors};

pub fn run_vendors() -> Result<()> {
    let profiles = builtin_profiles().context("build vendor profiles")?;
    print_vendors(&profiles);
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let source = &args.source;
    let span = info_span!("preview", vendor = %source.vendor, input = %source.input.display());
    let _guard = span.enter();

    let options = session_options(source, QuotePolicy::default()).with_preview_limit(args.limit);
    let mut session = open_session(&source.input, source.vendor, options)?;
    if args.normalized {
        session.normalize().context("normalize records")?;
    }

    let result = preview_rows(&session, args.limit, args.search.as_deref())?;
    print_preview(&result);
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let source = &args.source;
    let span = info_span!("convert", vendor = %source.vendor, input = %source.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut session = open_session(
        &source.input,
        source.vendor,
        session_options(source, args.quote.into()),
    )?;
    let document = convert(&mut session, args.raw)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&source.input));
    let written = write_export(&document, &output_dir, args.dry_run)?;

    let result = summarize(&session, &source.input, &document, written);
    info!(
        records = result.records,
        elapsed_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(result)
}

fn session_options(source: &SourceArgs, quote_policy: QuotePolicy) -> SessionOptions {
    SessionOptions::new()
        .with_delimiter(source.delimiter)
        .with_csv(CsvOptions::new().with_quote_policy(quote_policy))
}
