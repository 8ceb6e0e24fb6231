// Toolbox - core/report.rs
//
// Console rendering of level counts and per-level details.
// Core layer: writes to any Write trait object.

use crate::core::model::{LevelCounts, LogEntry};
use crate::util::constants;
use std::io::{self, Write};

/// Column widths of the counts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub level_width: usize,
    pub count_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            level_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            count_width: constants::DEFAULT_COUNT_COLUMN_WIDTH,
        }
    }
}

/// Write the two-column level/count table, one row per level in the order
/// `counts` yields them.
pub fn write_counts<W: Write>(
    out: &mut W,
    counts: &LevelCounts,
    layout: TableLayout,
) -> io::Result<()> {
    let lw = layout.level_width;
    let cw = layout.count_width;

    writeln!(
        out,
        "{:<lw$} | {:<cw$}",
        constants::LEVEL_COLUMN_TITLE,
        constants::COUNT_COLUMN_TITLE
    )?;
    writeln!(out, "{}|{}", "-".repeat(lw + 1), "-".repeat(cw + 1))?;
    for (level, count) in counts.iter() {
        writeln!(out, "{level:<lw$} | {count:<cw$}")?;
    }
    Ok(())
}

/// Write the details section for `level`: one `<date> <time> - <message>`
/// line per entry, or an explicit notice when nothing matched.
pub fn write_details<W: Write>(out: &mut W, level: &str, entries: &[&LogEntry]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Log details for level '{level}':")?;
    if entries.is_empty() {
        writeln!(out, "{}", constants::MSG_NO_LEVEL_ENTRIES)?;
        return Ok(());
    }
    for entry in entries {
        writeln!(out, "{} {} - {}", entry.date, entry.time, entry.message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_line;
    use crate::core::summary::{count_by_level, filter_by_level};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_counts_table_layout() {
        let entries: Vec<_> = ["d t INFO a", "d t ERROR b", "d t INFO c"]
            .iter()
            .filter_map(|l| parse_line(l))
            .collect();
        let counts = count_by_level(&entries);
        let output = render(|buf| write_counts(buf, &counts, TableLayout::default()));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Level            | Count   ");
        assert_eq!(lines[1], "-----------------|---------");
        assert_eq!(lines[2], "INFO             | 2       ");
        assert_eq!(lines[3], "ERROR            | 1       ");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_counts_table_custom_width() {
        let mut counts = LevelCounts::new();
        counts.record("WARN");
        let layout = TableLayout {
            level_width: 6,
            count_width: 3,
        };
        let output = render(|buf| write_counts(buf, &counts, layout));
        assert!(output.contains("WARN   | 1  \n"));
    }

    #[test]
    fn test_details_lists_matching_entries() {
        let entries: Vec<_> = ["2024-01-22 09:00:00 ERROR Database down", "d t INFO ok"]
            .iter()
            .filter_map(|l| parse_line(l))
            .collect();
        let matched = filter_by_level(&entries, "error");
        let output = render(|buf| write_details(buf, "ERROR", &matched));
        assert!(output.contains("Log details for level 'ERROR':"));
        assert!(output.contains("2024-01-22 09:00:00 - Database down"));
        assert!(!output.contains("ok"));
    }

    #[test]
    fn test_details_no_entries_message() {
        let output = render(|buf| write_details(buf, "DEBUG", &[]));
        assert!(output.contains(constants::MSG_NO_LEVEL_ENTRIES));
    }
}
