//! Grouping behavior over in-memory listings.
//!
//! Mirrors the grouping contract end to end without touching the
//! filesystem: entries are built directly and fed to the grouper in a
//! fixed order.

use namedupe::grouping::{group, Group, GroupingSummary};
use namedupe::scanner::FileEntry;
use std::path::PathBuf;
use std::time::SystemTime;

fn entries(names: &[&str]) -> Vec<FileEntry> {
    let now = SystemTime::UNIX_EPOCH;
    names
        .iter()
        .map(|n| FileEntry::new(PathBuf::from(n), 0, now))
        .collect()
}

fn grouped_names(groups: &[Group]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|g| g.names().iter().map(|n| (*n).to_string()).collect())
        .collect()
}

#[test]
fn does_not_group_files_without_similar_names() {
    let groups = group(entries(&["264.CR2", "265.CR2"])).unwrap();
    assert_eq!(grouped_names(&groups), [["264.CR2"], ["265.CR2"]]);
}

#[test]
fn groups_numbered_exports() {
    let groups = group(entries(&["264.CR2", "264-2.CR2"])).unwrap();
    assert_eq!(grouped_names(&groups), [["264.CR2", "264-2.CR2"]]);
}

#[test]
fn groups_padded_counter_exports() {
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
fn splits_groups_of_different_name_styles() {
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
fn groups_similar_names_regardless_of_order() {
    let groups = group(entries(&["264-2.CR2", "264.CR2"])).unwrap();
    assert_eq!(grouped_names(&groups), [["264-2.CR2", "264.CR2"]]);
}

#[test]
fn empty_listing_yields_no_groups() {
    let groups = group(Vec::new()).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn membership_is_decided_against_the_group_anchor() {
    // abc matches the anchor ab, but bc matches neither direction against
    // ab, so the neighbor chain ab~abc~bc does not pull bc in.
    let groups = group(entries(&["ab.x", "abc.x", "bc.x"])).unwrap();
    assert_eq!(grouped_names(&groups), [vec!["ab.x", "abc.x"], vec!["bc.x"]]);
}

#[test]
fn malformed_name_aborts_the_run() {
    let err = group(entries(&["264.CR2", "README"])).unwrap_err();
    assert_eq!(err.name, "README");
    assert!(err.to_string().contains("no dot-delimited extension"));
}

#[test]
fn summary_reflects_the_partition() {
    let groups = group(entries(&[
        "264.CR2",
        "264-2.CR2",
        "265.CR2",
        "DSC_2093.NEF",
        "DSC_2093-001.NEF",
    ]))
    .unwrap();
    let summary = GroupingSummary::from_groups(&groups);

    assert_eq!(summary.total_entries, 5);
    assert_eq!(summary.group_count, 3);
    assert_eq!(summary.candidate_groups, 2);
    assert_eq!(summary.candidate_files, 4);
    assert_eq!(summary.singletons, 1);
}
