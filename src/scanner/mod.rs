//! Directory-listing collaborator.
//!
//! The grouper itself never touches the filesystem. This module lists one
//! directory level and hands the grouper an ordered sequence of
//! [`FileEntry`] values; see [`lister`] for the ordering contract.

pub mod lister;

use std::path::PathBuf;
use std::time::SystemTime;

use serde::Serialize;

pub use lister::list_directory;

/// Metadata for one directory entry.
///
/// Only `name` participates in grouping; size, modification time and the
/// directory flag are carried through opaquely for the report.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    /// Base file name, including extension
    pub name: String,
    /// Full path to the entry
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: SystemTime,
    /// Whether this entry is a directory
    pub is_dir: bool,
}

impl FileEntry {
    /// Create an entry from a path; the name is the path's final component.
    #[must_use]
    pub fn new(path: PathBuf, size: u64, modified: SystemTime) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path,
            size,
            modified,
            is_dir: false,
        }
    }

    /// Mark the entry as a directory.
    #[must_use]
    pub fn with_is_dir(mut self, is_dir: bool) -> Self {
        self.is_dir = is_dir;
        self
    }
}

/// Errors from the directory-listing step.
///
/// All of these are terminal for the run; nothing is retried or
/// recovered silently.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The supplied path does not exist.
    #[error("unable to find path: {0}")]
    NotFound(PathBuf),

    /// The supplied path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The supplied directory exists but contains no entries.
    #[error("no files found in path: {0}")]
    EmptyDirectory(PathBuf),

    /// An I/O error occurred while listing.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_name_from_path() {
        let entry = FileEntry::new(
            PathBuf::from("/pics/264.CR2"),
            1024,
            SystemTime::UNIX_EPOCH,
        );

        assert_eq!(entry.name, "264.CR2");
        assert_eq!(entry.path, PathBuf::from("/pics/264.CR2"));
        assert_eq!(entry.size, 1024);
        assert!(!entry.is_dir);
    }

    #[test]
    fn test_file_entry_with_is_dir() {
        let entry = FileEntry::new(PathBuf::from("/pics/raw"), 0, SystemTime::UNIX_EPOCH)
            .with_is_dir(true);
        assert!(entry.is_dir);
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "unable to find path: /missing");

        let err = ScanError::EmptyDirectory(PathBuf::from("/empty"));
        assert_eq!(err.to_string(), "no files found in path: /empty");

        let err = ScanError::NotADirectory(PathBuf::from("/file.txt"));
        assert_eq!(err.to_string(), "not a directory: /file.txt");
    }
}
