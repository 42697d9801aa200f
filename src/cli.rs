//! Command-line interface definitions for namedupe.
//!
//! This module defines all CLI arguments using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Group maybe-duplicates in a directory of camera exports
//! namedupe --path ~/Pictures/import
//!
//! # Machine-readable report for scripting
//! namedupe --path ~/Pictures/import --output json
//!
//! # Verbose mode for debugging
//! namedupe -v --path ~/Pictures/import
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Groups files whose names look like exports of the same shot.
///
/// namedupe lists a directory, partitions its entries into maybe-duplicate
/// groups by name similarity, and reports the groups. No file content is
/// read and no file is ever modified.
#[derive(Debug, Parser)]
#[command(name = "namedupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for maybe-duplicate file names (required)
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Stop after reporting groups; never act on any file
    ///
    /// The post-grouping merge/delete step is not implemented, so every
    /// run currently behaves this way regardless of the flag.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format for the grouping report
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report errors as structured JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Output format for the grouping report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with colors
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
