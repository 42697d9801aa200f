//! Name-based maybe-duplicate grouping.
//!
//! The core of namedupe: a pure, single-pass partitioner over an ordered
//! directory listing.
//!
//! - [`similarity`]: the two-part name classifier and the similarity
//!   predicate
//! - [`grouper`]: the anchor-based greedy scan
//! - [`groups`]: the resulting [`Group`] partition and summary statistics
//!
//! # Example
//!
//! ```
//! use namedupe::grouping::group;
//! use namedupe::scanner::FileEntry;
//! use std::path::PathBuf;
//! use std::time::SystemTime;
//!
//! let now = SystemTime::now();
//! let entries = vec![
//!     FileEntry::new(PathBuf::from("264.CR2"), 0, now),
//!     FileEntry::new(PathBuf::from("264-2.CR2"), 0, now),
//!     FileEntry::new(PathBuf::from("265.CR2"), 0, now),
//! ];
//!
//! let groups = group(entries).unwrap();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].names(), ["264.CR2", "264-2.CR2"]);
//! ```

pub mod grouper;
pub mod groups;
pub mod similarity;

pub use grouper::group;
pub use groups::{Group, GroupingSummary};
pub use similarity::{similar, MalformedName, NameKey};
