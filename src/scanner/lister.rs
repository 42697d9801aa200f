//! Single-level directory listing.
//!
//! Produces the ordered entry sequence the grouper consumes. Entries are
//! sorted by file name: the grouper's contiguity heuristic only works when
//! related export names sit next to each other, and platform `read_dir`
//! order is unspecified. Changing the order changes grouping results, so
//! the sort is part of this collaborator's contract, not an internal
//! detail of the grouper.

use std::path::Path;
use std::time::SystemTime;

use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// List the entries of `path`, one level deep, sorted by file name.
///
/// Directories are included and carried through opaquely; the listing is
/// never recursive.
///
/// # Errors
///
/// - [`ScanError::NotFound`] if `path` does not exist
/// - [`ScanError::NotADirectory`] if `path` is not a directory
/// - [`ScanError::EmptyDirectory`] if the directory holds no entries;
///   this is checked here so the failure surfaces before any grouping
/// - [`ScanError::Io`] for any underlying I/O failure
pub fn list_directory(path: &Path) -> Result<Vec<FileEntry>, ScanError> {
    let meta = std::fs::metadata(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ScanError::NotFound(path.to_path_buf())
        } else {
            ScanError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_io_error(e, path))?;
        let meta = entry.metadata().map_err(|e| walk_io_error(e, path))?;
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        entries.push(
            FileEntry::new(entry.path().to_path_buf(), meta.len(), modified)
                .with_is_dir(meta.is_dir()),
        );
    }

    if entries.is_empty() {
        return Err(ScanError::EmptyDirectory(path.to_path_buf()));
    }

    log::debug!("listed {} entries in {}", entries.len(), path.display());
    Ok(entries)
}

/// Convert a walkdir error into [`ScanError::Io`], keeping the failing
/// path when walkdir knows it.
fn walk_io_error(err: walkdir::Error, fallback: &Path) -> ScanError {
    let path = err
        .path()
        .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("directory walk error"));
    ScanError::Io { path, source }
}
