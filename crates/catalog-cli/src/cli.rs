//! CLI argument definitions for the catalog converter.

use std::path::PathBuf;

use catalog_core::DEFAULT_PREVIEW_LIMIT;
use catalog_model::Delimiter;
use catalog_normalization::Vendor;
use catalog_output::QuotePolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-studio",
    version,
    about = "Convert supplier product catalogs into the import CSV layout",
    long_about = "Convert supplier product catalogs into the import CSV layout.\n\n\
                  Reads delimited text or spreadsheet records (.json), applies the\n\
                  vendor's field rules and writes a CSV under the vendor's file name."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in vendor profiles.
    Vendors,

    /// Show the first rows of a source file, raw or normalized.
    Preview(PreviewArgs),

    /// Convert a source file and write the vendor export.
    Convert(ConvertArgs),
}

/// Source selection shared by `preview` and `convert`.
#[derive(Args)]
pub struct SourceArgs {
    /// Source file: delimited text, or `.json` spreadsheet records.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Vendor profile (generic, uneek, ascolour, carolinamade).
    #[arg(long = "vendor", default_value = "generic")]
    pub vendor: Vendor,

    /// Field delimiter (tab, comma, pipe, semicolon, space); defaults to the vendor's.
    #[arg(long = "delimiter")]
    pub delimiter: Option<Delimiter>,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Preview the normalized table instead of the raw one.
    #[arg(long = "normalized")]
    pub normalized: bool,

    /// Maximum number of rows to show.
    #[arg(long = "limit", default_value_t = DEFAULT_PREVIEW_LIMIT)]
    pub limit: usize,

    /// Only show rows containing this text (case-insensitive).
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Export the raw table without applying vendor rules.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Value quoting policy.
    #[arg(long = "quote", value_enum, default_value = "necessary")]
    pub quote: QuoteArg,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Convert and report without writing the export file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI quote policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum QuoteArg {
    Always,
    Necessary,
}

impl From<QuoteArg> for QuotePolicy {
    fn from(arg: QuoteArg) -> Self {
        match arg {
            QuoteArg::Always => QuotePolicy::Always,
            QuoteArg::Necessary => QuotePolicy::Necessary,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "catalog-studio",
            "convert",
            "stock.txt",
            "--vendor",
            "carolinamade",
            "--delimiter",
            "pipe",
            "--quote",
            "always",
            "--dry-run",
        ])
        .unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.source.vendor, Vendor::CarolinaMade);
        assert_eq!(args.source.delimiter, Some(Delimiter::Pipe));
        assert_eq!(QuotePolicy::from(args.quote), QuotePolicy::Always);
        assert!(args.dry_run);
    }

    #[test]
    fn test_parse_preview_defaults() {
        let cli = Cli::try_parse_from(["catalog-studio", "preview", "data.txt"]).unwrap();
        let Command::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.source.vendor, Vendor::Generic);
        assert_eq!(args.source.delimiter, None);
        assert_eq!(args.limit, DEFAULT_PREVIEW_LIMIT);
        assert!(args.search.is_none());
    }

    #[test]
    fn test_unknown_vendor_is_rejected() {
        let result = Cli::try_parse_from(["catalog-studio", "preview", "a.txt", "--vendor", "nope"]);
        assert!(result.is_err());
    }
}
