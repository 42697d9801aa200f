//! Group and summary types for the grouping result.

use serde::Serialize;

use crate::scanner::FileEntry;

/// An ordered, non-empty run of entries believed to be variants of one
/// logical item.
///
/// Groups are transient: produced fresh by each grouping run and owned by
/// the caller. A group is a "maybe-duplicate" judgment, pending a user or
/// downstream decision.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    /// Entries in input order; the first entry is the group's anchor
    pub files: Vec<FileEntry>,
}

impl Group {
    /// Open a new group with its anchor entry.
    pub(crate) fn open(first: FileEntry) -> Self {
        Self { files: vec![first] }
    }

    /// Append an entry that matched the anchor.
    pub(crate) fn push(&mut self, entry: FileEntry) {
        self.files.push(entry);
    }

    /// The entry this group was opened with.
    #[must_use]
    pub fn anchor(&self) -> Option<&FileEntry> {
        self.files.first()
    }

    /// Number of entries in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the group holds no entries. Groups produced by
    /// [`group`](crate::grouping::group) are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether the group holds more than one entry and is therefore a
    /// maybe-duplicate candidate.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.files.len() > 1
    }

    /// Total size of all entries in this group.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Names of the entries, in group order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Statistics over one grouping run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupingSummary {
    /// Entries consumed from the listing
    pub total_entries: usize,
    /// Total size of all entries in bytes
    pub total_size: u64,
    /// Groups produced (the partition size)
    pub group_count: usize,
    /// Groups with 2+ entries
    pub candidate_groups: usize,
    /// Entries inside candidate groups
    pub candidate_files: usize,
    /// Groups with exactly one entry
    pub singletons: usize,
}

impl GroupingSummary {
    /// Derive summary statistics from a grouping result.
    #[must_use]
    pub fn from_groups(groups: &[Group]) -> Self {
        let mut summary = Self {
            group_count: groups.len(),
            ..Self::default()
        };

        for group in groups {
            summary.total_entries += group.len();
            summary.total_size += group.total_size();
            if group.has_variants() {
                summary.candidate_groups += 1;
                summary.candidate_files += group.len();
            } else {
                summary.singletons += 1;
            }
        }

        summary
    }
}
