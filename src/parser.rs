//! Chat export parser.
//!
//! Turns a raw export blob into the normalized record table in three steps,
//! each feeding the next:
//!
//! 1. **Split**: the detected dialect's delimiter pattern segments the text
//!    into (timestamp, remainder) entries. Text before the first delimiter
//!    (typically a header, usually empty) is discarded.
//! 2. **Extract**: each remainder is separated into author and body, or
//!    tagged as a system notification when no `name: ` prefix exists.
//! 3. **Normalize**: every triple expands into a [`Record`] with all derived
//!    calendar fields, preserving input order.
//!
//! # Example
//!
//! ```
//! use chatlens::parse;
//!
//! let log = "1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi there\n";
//! let records = parse(log)?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].author, "Alice");
//! assert_eq!(records[1].message, "Hi there");
//! # Ok::<(), chatlens::ChatLensError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};

use crate::dialect::Dialect;
use crate::error::{ChatLensError, Result};
use crate::record::{GROUP_NOTIFICATION, Record};

/// Leading `name: ` prefix of an authored entry.
///
/// Non-greedy, so the author ends at the first colon followed by one
/// whitespace character. A body that itself contains an early `: ` with no
/// genuine author prefix misparses by design: the reference behavior is
/// preserved exactly rather than guessed around.
const AUTHOR_PATTERN: &str = r"(?s)^(.+?):\s(.*)$";

/// Parses a full chat export into the record table.
///
/// Detects the timestamp dialect, splits, extracts, and normalizes. The
/// returned table keeps source order: one row per entry, no sorting, no
/// deduplication.
///
/// Empty or whitespace-only input is the degenerate case and yields an empty
/// table; every aggregation accepts that without erroring.
///
/// # Errors
///
/// - [`ChatLensError::UnrecognizedFormat`] when non-empty input contains no
///   delimiter for the detected dialect
/// - [`ChatLensError::Timestamp`] when a delimiter-matched timestamp fails
///   chrono parsing (fatal for the whole document)
pub fn parse(text: &str) -> Result<Vec<Record>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_with_dialect(text, Dialect::detect(text))
}

/// Parses with an explicitly chosen dialect, skipping detection.
pub fn parse_with_dialect(text: &str, dialect: Dialect) -> Result<Vec<Record>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries = split_entries(text, dialect)?;
    let prefix = Regex::new(AUTHOR_PATTERN).unwrap();

    let mut records = Vec::with_capacity(entries.len());
    for (timestamp, remainder) in entries {
        let (author, body) = split_author(&prefix, remainder);
        // Entries carry the newline that ends their last line; the media
        // placeholder and word counts compare against the bare body.
        let body = body.strip_suffix('\n').unwrap_or(body);
        records.push(Record::new(timestamp, author, body));
    }
    Ok(records)
}

/// Reads a file and parses its contents.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parse_file;
///
/// let records = parse_file("whatsapp_chat.txt".as_ref())?;
/// println!("{} records", records.len());
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub fn parse_file(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Splits raw text into (timestamp, remainder) entries in document order.
///
/// Each remainder spans from the end of its delimiter match to the start of
/// the next one (or end of text), so multiline messages stay intact.
fn split_entries(text: &str, dialect: Dialect) -> Result<Vec<(NaiveDateTime, &str)>> {
    let delimiter = Regex::new(dialect.delimiter_pattern()).unwrap();
    let matches: Vec<Captures<'_>> = delimiter.captures_iter(text).collect();

    if matches.is_empty() {
        return Err(ChatLensError::unrecognized_format(dialect.as_str()));
    }

    let mut entries = Vec::with_capacity(matches.len());
    for (i, caps) in matches.iter().enumerate() {
        let stamp = caps.get(1).map_or("", |m| m.as_str());
        let timestamp = NaiveDateTime::parse_from_str(stamp, dialect.timestamp_format())
            .map_err(|source| ChatLensError::timestamp(stamp, source))?;

        let body_start = caps.get(0).map_or(text.len(), |m| m.end());
        let body_end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        entries.push((timestamp, &text[body_start..body_end]));
    }
    Ok(entries)
}

/// Separates an entry remainder into author and body.
///
/// No `name: ` prefix means the entry is a system notification: the whole
/// remainder becomes the body under the [`GROUP_NOTIFICATION`] sentinel.
fn split_author<'a>(prefix: &Regex, remainder: &'a str) -> (&'a str, &'a str) {
    match prefix.captures(remainder) {
        Some(caps) => (
            caps.get(1).map_or(GROUP_NOTIFICATION, |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (GROUP_NOTIFICATION, remainder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Period;

    #[test]
    fn test_parse_twenty_four_hour() {
        let log = "1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi there\n";
        let records = parse(log).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].author, "Alice");
        assert_eq!(records[0].message, "Hello");
        assert_eq!(records[1].author, "Bob");
        assert_eq!(records[1].message, "Hi there");
        assert_eq!(records[0].period, Period::Morning);
        assert_eq!(records[1].period, Period::Morning);
    }

    #[test]
    fn test_parse_twelve_hour() {
        let log = "1/1/24, 9:00 AM - Alice: Good morning\n\
                   1/1/24, 12:30 PM - Bob: Lunch?\n\
                   1/1/24, 9:15 PM - Alice: Good night\n";
        let records = parse(log).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].hour, 9);
        assert_eq!(records[1].hour, 12);
        assert_eq!(records[2].hour, 21);
        assert_eq!(records[2].period, Period::Night);
    }

    #[test]
    fn test_notification_has_sentinel_author() {
        let log = "1/1/24, 10:10 - Alice added Bob\n";
        let records = parse(log).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author, GROUP_NOTIFICATION);
        assert_eq!(records[0].message, "Alice added Bob");
    }

    #[test]
    fn test_multiline_message_stays_intact() {
        let log = "1/1/24, 10:00 - Alice: line one\nline two\n1/1/24, 10:05 - Bob: ok\n";
        let records = parse(log).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "line one\nline two");
        assert_eq!(records[1].message, "ok");
    }

    #[test]
    fn test_header_before_first_delimiter_is_discarded() {
        let log = "Messages to this chat are secured\n1/1/24, 10:00 - Alice: Hello\n";
        let records = parse(log).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author, "Alice");
    }

    #[test]
    fn test_colon_in_body_keeps_first_split() {
        let log = "1/1/24, 10:00 - Alice: note: remember this\n";
        let records = parse(log).unwrap();

        assert_eq!(records[0].author, "Alice");
        assert_eq!(records[0].message, "note: remember this");
    }

    #[test]
    fn test_colon_ambiguity_is_not_special_cased() {
        // Known misparse: an unauthored line with an early ": " reads as an
        // author prefix. Kept as-is for behavioral parity.
        let log = "1/1/24, 10:00 - Meeting at 5: see the agenda\n";
        let records = parse(log).unwrap();

        assert_eq!(records[0].author, "Meeting at 5");
        assert_eq!(records[0].message, "see the agenda");
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_unrecognized_format_fails() {
        let err = parse("just some prose with no timestamps").unwrap_err();
        assert!(matches!(err, ChatLensError::UnrecognizedFormat { .. }));
    }

    #[test]
    fn test_four_digit_year_is_fatal() {
        // The delimiter admits 2-4 digit years but the dialect format parses
        // two; a mismatch fails the whole document rather than one row.
        let err = parse("1/1/2024, 10:00 - Alice: Hello\n").unwrap_err();
        assert!(matches!(err, ChatLensError::Timestamp { .. }));
    }

    #[test]
    fn test_records_preserve_source_order() {
        let log = "1/1/24, 10:00 - Alice: one\n\
                   1/1/24, 10:01 - Bob: two\n\
                   1/1/24, 10:01 - Bob: two\n\
                   1/1/24, 10:02 - Alice: three\n";
        let records = parse(log).unwrap();

        // No deduplication: repeated lines produce repeated records.
        assert_eq!(records.len(), 4);
        assert_eq!(records[1].message, "two");
        assert_eq!(records[2].message, "two");
    }

    #[test]
    fn test_unicode_authors_and_bodies() {
        let log = "1/1/24, 10:00 - Иван: Привет мир 🌍\n1/1/24, 10:01 - 田中: こんにちは\n";
        let records = parse(log).unwrap();

        assert_eq!(records[0].author, "Иван");
        assert_eq!(records[0].message, "Привет мир 🌍");
        assert_eq!(records[1].author, "田中");
    }

    #[test]
    fn test_parse_with_explicit_dialect() {
        // A 24-hour log whose bodies mention enough AM/PM times to fool the
        // detector still parses when the dialect is passed explicitly.
        let log = "1/1/24, 09:00 - A: 9:00 AM\n\
                   1/1/24, 10:00 - B: 10:00 AM\n\
                   1/1/24, 11:00 - C: 11:00 AM\n";
        let records = parse_with_dialect(log, Dialect::TwentyFourHour).unwrap();
        assert_eq!(records.len(), 3);
    }
}
