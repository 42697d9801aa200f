//! JSON output formatter for grouping reports.
//!
//! Provides machine-readable output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "groups": [
//!     {
//!       "anchor": "264.CR2",
//!       "total_size": 47185920,
//!       "files": ["/pics/264.CR2", "/pics/264-2.CR2"]
//!     }
//!   ],
//!   "summary": {
//!     "total_entries": 10,
//!     "total_size": 104857600,
//!     "group_count": 8,
//!     "candidate_groups": 2,
//!     "candidate_files": 4,
//!     "singletons": 6,
//!     "exit_code": 0,
//!     "exit_code_name": "ND000"
//!   }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::error::ExitCode;
use crate::grouping::{Group, GroupingSummary};

/// A single candidate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonGroup {
    /// Name of the entry the group was opened with
    pub anchor: String,
    /// Combined size of the group's entries in bytes
    pub total_size: u64,
    /// Absolute paths to all entries in the group
    pub files: Vec<String>,
}

impl JsonGroup {
    /// Create a JSON group from a [`Group`].
    ///
    /// Paths are converted to absolute paths where possible.
    #[must_use]
    pub fn from_group(group: &Group) -> Self {
        Self {
            anchor: group
                .anchor()
                .map_or_else(String::new, |a| a.name.clone()),
            total_size: group.total_size(),
            files: group
                .files
                .iter()
                .map(|f| normalize_path(f.path.as_path()))
                .collect(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Entries consumed from the listing
    pub total_entries: usize,
    /// Total size of all entries in bytes
    pub total_size: u64,
    /// Groups produced by the partition
    pub group_count: usize,
    /// Groups with 2+ entries
    pub candidate_groups: usize,
    /// Entries inside candidate groups
    pub candidate_files: usize,
    /// Groups with exactly one entry
    pub singletons: usize,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "ND000")
    pub exit_code_name: String,
}

impl JsonSummary {
    /// Create a JSON summary from a [`GroupingSummary`] and an exit code.
    #[must_use]
    pub fn from_summary(summary: &GroupingSummary, exit_code: ExitCode) -> Self {
        Self {
            total_entries: summary.total_entries,
            total_size: summary.total_size,
            group_count: summary.group_count,
            candidate_groups: summary.candidate_groups,
            candidate_files: summary.candidate_files,
            singletons: summary.singletons,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Candidate groups (2+ entries); singletons appear only in the summary
    pub groups: Vec<JsonGroup>,
    /// Grouping summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from the grouping result.
    #[must_use]
    pub fn new(groups: &[Group], summary: &GroupingSummary, exit_code: ExitCode) -> Self {
        Self {
            groups: groups
                .iter()
                .filter(|g| g.has_variants())
                .map(JsonGroup::from_group)
                .collect(),
            summary: JsonSummary::from_summary(summary, exit_code),
        }
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write JSON to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonOutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Normalize a path to an absolute path string.
///
/// Attempts to canonicalize the path. If that fails (e.g., the file was
/// removed since listing), falls back to the display representation.
fn normalize_path(path: &std::path::Path) -> String {
    match path.canonicalize() {
        Ok(canonical) => canonical.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
