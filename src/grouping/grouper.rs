//! Anchor-based greedy grouping over an ordered listing.
//!
//! # Anchor semantics
//!
//! Grouping is a single linear pass, order-sensitive and anchor-based,
//! not a symmetric transitive closure over all pairs. The anchor is the
//! entry a group was opened with; it is the sole comparison basis for
//! subsequent membership tests while the group stays open. Given
//! `[A, B, C]` where A~B and B~C but not A~C, the result keeps all three
//! together only if C also matches A.
//!
//! This makes grouping depend on input order: the caller must supply a
//! listing where related names sit next to each other (the
//! [`lister`](crate::scanner::lister) sorts by name for this reason).

use super::groups::Group;
use super::similarity::{similar, MalformedName};
use crate::scanner::FileEntry;

/// Partition `entries` into contiguous maybe-duplicate groups.
///
/// The first entry opens a group and becomes the comparison anchor. Every
/// subsequent entry is compared to the anchor only: a match appends it to
/// the open group; a mismatch closes the group, opens a new one, and
/// makes that entry the new anchor. The anchor never moves while its
/// group stays open.
///
/// The result is a partition of the input: every entry appears in exactly
/// one group, each group is a contiguous run of the input, and the total
/// count across groups equals the input length. Empty input yields an
/// empty result.
///
/// # Errors
///
/// Returns [`MalformedName`] when a compared name has no dot-delimited
/// extension component. An entry that is never compared (the sole entry
/// of a one-entry input) is not classified and cannot fail.
///
/// # Example
///
/// ```
/// use namedupe::grouping::group;
/// use namedupe::scanner::FileEntry;
/// use std::path::PathBuf;
/// use std::time::SystemTime;
///
/// let now = SystemTime::now();
/// let entries = vec![
///     FileEntry::new(PathBuf::from("DSC_2093.NEF"), 0, now),
///     FileEntry::new(PathBuf::from("DSC_2093-001.NEF"), 0, now),
///     FileEntry::new(PathBuf::from("DSC_2093-002.NEF"), 0, now),
/// ];
///
/// let groups = group(entries).unwrap();
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].len(), 3);
/// ```
pub fn group(entries: Vec<FileEntry>) -> Result<Vec<Group>, MalformedName> {
    let mut out = Vec::new();
    let mut iter = entries.into_iter();
    let Some(first) = iter.next() else {
        return Ok(out);
    };

    let mut anchor = first.name.clone();
    let mut open = Group::open(first);

    for entry in iter {
        if similar(&anchor, &entry.name)? {
            log::trace!("{} joins the group anchored at {}", entry.name, anchor);
            open.push(entry);
        } else {
            log::trace!("{} opens a new group", entry.name);
            anchor.clone_from(&entry.name);
            out.push(std::mem::replace(&mut open, Group::open(entry)));
        }
    }
    out.push(open);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|n| FileEntry::new(PathBuf::from(n), 0, SystemTime::UNIX_EPOCH))
            .collect()
    }

    fn grouped_names(groups: &[Group]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| g.names().iter().map(|n| (*n).to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let groups = group(Vec::new()).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_single_entry_forms_one_group() {
        let groups = group(entries(&["264.CR2"])).unwrap();
        assert_eq!(grouped_names(&groups), [["264.CR2"]]);
    }

    #[test]
    fn test_dissimilar_names_stay_apart() {
        let groups = group(entries(&["264.CR2", "265.CR2"])).unwrap();
        assert_eq!(grouped_names(&groups), [["264.CR2"], ["265.CR2"]]);
    }

    #[test]
    fn test_numbered_suffix_groups_together() {
        let groups = group(entries(&["264.CR2", "264-2.CR2"])).unwrap();
        assert_eq!(grouped_names(&groups), [["264.CR2", "264-2.CR2"]]);
    }

    #[test]
    fn test_multi_suffix_groups_against_fixed_anchor() {
        let groups = group(entries(&[
            "DSC_2093.NEF",
            "DSC_2093-001.NEF",
            "DSC_2093-002.NEF",
        ]))
        .unwrap();
        assert_eq!(
            grouped_names(&groups),
            [["DSC_2093.NEF", "DSC_2093-001.NEF", "DSC_2093-002.NEF"]]
        );
    }

    #[test]
    fn test_mixed_styles_split_at_extension_boundary() {
        let groups = group(entries(&[
            "P3190152.ORF",
            "P3190152 (2).ORF",
            "IMG_1766.CR2",
            "IMG_1766_2.CR2",
        ]))
        .unwrap();
        assert_eq!(
            grouped_names(&groups),
            [
                vec!["P3190152.ORF", "P3190152 (2).ORF"],
                vec!["IMG_1766.CR2", "IMG_1766_2.CR2"],
            ]
        );
    }

    #[test]
    fn test_reversed_order_still_groups() {
        let groups = group(entries(&["264-2.CR2", "264.CR2"])).unwrap();
        assert_eq!(grouped_names(&groups), [["264-2.CR2", "264.CR2"]]);
    }

    #[test]
    fn test_anchor_stays_fixed_while_group_open() {
        // ab~abc and abc~bc, but bc is tested against the anchor ab and
        // fails, so the chain does not drift with the neighbors.
        let groups = group(entries(&["ab.x", "abc.x", "bc.x"])).unwrap();
        assert_eq!(
            grouped_names(&groups),
            [vec!["ab.x", "abc.x"], vec!["bc.x"]]
        );
    }

    #[test]
    fn test_anchor_moves_to_group_opener() {
        // 265-2 opens the second group and becomes its anchor, so 265
        // joins it even though 265 does not match the first anchor.
        let groups = group(entries(&["264.CR2", "265-2.CR2", "265.CR2"])).unwrap();
        assert_eq!(
            grouped_names(&groups),
            [vec!["264.CR2"], vec!["265-2.CR2", "265.CR2"]]
        );
    }

    #[test]
    fn test_malformed_name_is_reported() {
        let err = group(entries(&["264.CR2", "README"])).unwrap_err();
        assert_eq!(err.name, "README");
    }

    #[test]
    fn test_malformed_anchor_is_reported() {
        let err = group(entries(&["README", "264.CR2"])).unwrap_err();
        assert_eq!(err.name, "README");
    }

    #[test]
    fn test_sole_malformed_entry_is_never_compared() {
        let groups = group(entries(&["README"])).unwrap();
        assert_eq!(grouped_names(&groups), [["README"]]);
    }
}
