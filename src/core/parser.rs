// Toolbox - core/parser.rs
//
// Whitespace-delimited log line parsing.
// Core layer: works on string slices, never touches the filesystem.
//
// Line shape: `<date> <time> <level> <message...>`

use crate::core::model::LogEntry;
use crate::util::constants::LOG_LINE_FIELDS;

/// Parse one raw line into a [`LogEntry`].
///
/// The line is trimmed, then split on whitespace into at most four fields;
/// the fourth keeps the rest of the line with its internal spacing intact.
/// Returns `None` when fewer than four fields are present. Rejection is a
/// normal outcome, not an error.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let mut rest = line.trim();
    let mut fields: Vec<&str> = Vec::with_capacity(LOG_LINE_FIELDS);

    while fields.len() < LOG_LINE_FIELDS - 1 {
        let (field, tail) = next_field(rest)?;
        fields.push(field);
        rest = tail;
    }

    // `rest` was trimmed at both ends already.
    if rest.is_empty() {
        return None;
    }

    Some(LogEntry {
        date: fields[0].to_string(),
        time: fields[1].to_string(),
        level: fields[2].to_uppercase(),
        message: rest.to_string(),
    })
}

/// Split off the first whitespace-delimited field of `s`.
///
/// Returns the field and the remainder with leading whitespace removed, or
/// `None` if `s` has no separator (i.e. this is the last field).
fn next_field(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    Some((&s[..end], s[end..].trim_start()))
}

/// Parse every line of `content`, dropping rejected lines silently.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Entries keep file order.
/// Rejected lines are only visible at trace level.
pub fn parse_content(content: &str) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    for (line_idx, line) in content.split(['\r', '\n']).enumerate() {
        match parse_line(line) {
            Some(entry) => entries.push(entry),
            None => {
                tracing::trace!(line_number = line_idx + 1, "Skipping malformed line");
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_line() {
        let entry = parse_line("2024-01-22 08:30:01 INFO User logged in successfully.").unwrap();
        assert_eq!(entry.date, "2024-01-22");
        assert_eq!(entry.time, "08:30:01");
        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.message, "User logged in successfully.");
    }

    #[test]
    fn test_level_is_uppercased() {
        let entry = parse_line("2024-01-22 08:30:01 warning Disk almost full").unwrap();
        assert_eq!(entry.level, "WARNING");
    }

    #[test]
    fn test_message_keeps_internal_whitespace() {
        let entry = parse_line("  d  t\tERROR   a  b\t c  \n").unwrap();
        assert_eq!(entry.date, "d");
        assert_eq!(entry.time, "t");
        assert_eq!(entry.level, "ERROR");
        assert_eq!(entry.message, "a  b\t c");
    }

    #[test]
    fn test_fewer_than_four_fields_rejected() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("2024-01-22").is_none());
        assert!(parse_line("2024-01-22 08:30:01").is_none());
        assert!(parse_line("2024-01-22 08:30:01 INFO").is_none());
        assert!(parse_line("2024-01-22 08:30:01 INFO    ").is_none());
    }

    #[test]
    fn test_exactly_four_fields() {
        let entry = parse_line("a b c d").unwrap();
        assert_eq!(entry.message, "d");
    }

    #[test]
    fn test_parse_content_skips_rejects_and_keeps_order() {
        let content = "\
2024-01-22 08:30:01 INFO first
garbage
2024-01-22 08:31:01 error second

2024-01-22 08:32:01 DEBUG third";
        let entries = parse_content(content);
        let messages: Vec<_> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(entries[1].level, "ERROR");
    }

    #[test]
    fn test_parse_content_carriage_return_endings() {
        let entries = parse_content("d t INFO a\rd t ERROR b\r");
        let levels: Vec<_> = entries.iter().map(|e| e.level.as_str()).collect();
        assert_eq!(levels, vec!["INFO", "ERROR"]);
        assert_eq!(entries[0].message, "a");

        let entries = parse_content("d t INFO a\r\nd t DEBUG b  c\r\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].message, "b  c");
    }

    #[test]
    fn test_parse_content_empty() {
        assert!(parse_content("").is_empty());
    }
}
