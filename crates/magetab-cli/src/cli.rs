//! CLI argument definitions for the MAGE-TAB converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mage2isa",
    version,
    about = "Convert MAGE-TAB submissions to ISA-TAB",
    long_about = "Convert a MAGE-TAB submission (IDF plus SDRF files) into an\n\
                  ISA-TAB investigation file and study-sample table.\n\
                  Multiple SDRF files are merged into one sample table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// Convert one MAGE-TAB submission.
    Convert(ConvertArgs),

    /// List the canonical investigation sections and their field order.
    Sections,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the IDF file.
    #[arg(value_name = "IDF_FILE")]
    pub idf: PathBuf,

    /// Submission accession (default: derived from the IDF file name).
    #[arg(long = "accession", value_name = "ACCESSION")]
    pub accession: Option<String>,

    /// Directory searched for declared SDRF files
    /// (default: the IDF's directory).
    #[arg(long = "sdrf-dir", value_name = "DIR")]
    pub sdrf_dir: Option<PathBuf>,

    /// Output directory (default: <IDF directory>/converted).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Convert and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the conversion summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
