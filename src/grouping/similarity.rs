//! Name classification and the similarity predicate.
//!
//! Two names are considered similar when their extension components match
//! exactly and one stem contains the other. This cheap heuristic captures
//! common camera-export numbering (`264.CR2` / `264-2.CR2`,
//! `DSC_2093.NEF` / `DSC_2093-001.NEF`) without reading file content. It
//! is intentionally permissive: a match means "maybe duplicate", not a
//! certainty.

use thiserror::Error;

/// A file name without a dot-delimited extension component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("file name has no dot-delimited extension: {name:?}")]
pub struct MalformedName {
    /// The offending file name
    pub name: String,
}

/// Two-part key derived from a file name: the stem before the first `.`
/// and the extension between the first and second `.`.
///
/// Dots past the second component are ignored for comparison, so
/// `shot.tar.gz` and `shot-2.tar.bz2` share the extension `tar`.
/// Computed on demand; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameKey<'a> {
    /// Everything before the first `.`
    pub stem: &'a str,
    /// The first dot-delimited segment after the first `.`
    pub extension: &'a str,
}

impl<'a> NameKey<'a> {
    /// Split `name` into stem and extension on the first `.`.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedName`] when the name contains no `.` at all.
    ///
    /// # Example
    ///
    /// ```
    /// use namedupe::grouping::NameKey;
    ///
    /// let key = NameKey::classify("DSC_2093-001.NEF").unwrap();
    /// assert_eq!(key.stem, "DSC_2093-001");
    /// assert_eq!(key.extension, "NEF");
    ///
    /// assert!(NameKey::classify("README").is_err());
    /// ```
    pub fn classify(name: &'a str) -> Result<Self, MalformedName> {
        let Some((stem, rest)) = name.split_once('.') else {
            return Err(MalformedName {
                name: name.to_string(),
            });
        };
        let extension = rest.split('.').next().unwrap_or(rest);
        Ok(Self { stem, extension })
    }
}

/// Decide whether two file names plausibly refer to the same logical item.
///
/// True iff the extensions are exactly equal (case-sensitive) and one stem
/// is a substring of the other, in either direction. Equal stems are
/// trivially similar, and the predicate is symmetric for any pair of
/// well-formed names.
///
/// # Errors
///
/// Returns [`MalformedName`] when either name lacks an extension
/// component.
pub fn similar(a: &str, b: &str) -> Result<bool, MalformedName> {
    let key_a = NameKey::classify(a)?;
    let key_b = NameKey::classify(b)?;

    Ok(key_a.extension == key_b.extension
        && (key_a.stem.contains(key_b.stem) || key_b.stem.contains(key_a.stem)))
}
