//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the namedupe application.
///
/// - 0: Success (grouping completed, candidate groups found)
/// - 1: General error (bad path, empty directory, malformed file name)
/// - 2: No candidates (grouping completed, every group is a singleton)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: grouping completed and at least one candidate group was found.
    Success = 0,
    /// General error: an error terminated the run before a report was produced.
    GeneralError = 1,
    /// No candidates: grouping completed but every group holds a single entry.
    NoCandidates = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "ND000",
            Self::GeneralError => "ND001",
            Self::NoCandidates => "ND002",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "ND001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}
