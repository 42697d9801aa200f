//! Human-readable text report.

use std::io::Write;

use bytesize::ByteSize;
use yansi::Paint;

use crate::grouping::{Group, GroupingSummary};

/// Renders candidate groups and a summary footer to a writer.
///
/// Singleton groups are counted in the footer but not listed; a file with
/// no similarly-named sibling needs no review.
#[derive(Debug)]
pub struct TextReport<'a> {
    groups: &'a [Group],
    summary: &'a GroupingSummary,
}

impl<'a> TextReport<'a> {
    /// Create a report over a grouping result.
    #[must_use]
    pub fn new(groups: &'a [Group], summary: &'a GroupingSummary) -> Self {
        Self { groups, summary }
    }

    /// Write the report.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for group in self.groups.iter().filter(|g| g.has_variants()) {
            let anchor = group.anchor().map_or("", |a| a.name.as_str());
            writeln!(
                writer,
                "{} ({} entries, {})",
                anchor.bold(),
                group.len(),
                ByteSize::b(group.total_size())
            )?;
            for file in &group.files {
                writeln!(
                    writer,
                    "    {}  {}",
                    file.name,
                    ByteSize::b(file.size).to_string().dim()
                )?;
            }
            writeln!(writer)?;
        }

        if self.summary.candidate_groups == 0 {
            writeln!(writer, "{}", "no maybe-duplicate names found".green())?;
        } else {
            writeln!(
                writer,
                "{} candidate group(s): {} of {} entries flagged as maybe-duplicates",
                self.summary.candidate_groups.yellow().bold(),
                self.summary.candidate_files,
                self.summary.total_entries
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::FileEntry;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn render(names: &[&str]) -> String {
        // Escape sequences would get in the way of substring assertions.
        yansi::disable();

        let now = SystemTime::UNIX_EPOCH;
        let entries = names
            .iter()
            .map(|n| FileEntry::new(PathBuf::from(n), 10, now))
            .collect();
        let groups = crate::grouping::group(entries).unwrap();
        let summary = GroupingSummary::from_groups(&groups);

        let mut buffer = Vec::new();
        TextReport::new(&groups, &summary)
            .write_to(&mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_lists_candidate_group_members() {
        let report = render(&["264.CR2", "264-2.CR2", "265.CR2"]);

        assert!(report.contains("264.CR2"));
        assert!(report.contains("264-2.CR2"));
        assert!(report.contains("1 candidate group(s)"));
        assert!(report.contains("2 of 3 entries"));
    }

    #[test]
    fn test_report_skips_singletons() {
        let report = render(&["264.CR2", "265.CR2"]);

        assert!(report.contains("no maybe-duplicate names found"));
        // Singletons are not listed as groups.
        assert!(!report.contains("entries,"));
    }
}
