//! Headline totals: messages, words, media, links.

use serde::Serialize;

use super::Selection;
use crate::record::Record;

/// Totals returned by [`fetch_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Number of records in scope, notifications included.
    pub messages: usize,
    /// Whitespace-split token count over every message body, media
    /// placeholders included.
    pub words: usize,
    /// Number of omitted-media placeholder messages.
    pub media: usize,
    /// Number of URLs the injected extractor found across all bodies.
    pub links: usize,
}

/// Computes headline totals for the selection.
///
/// Unlike the other queries this one keeps system notifications in scope, so
/// the message count matches the raw export line count for the selection.
/// URL extraction is a collaborator the caller supplies; the library does
/// not bundle one.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{Selection, fetch_stats};
/// use chatlens::parse;
///
/// let records = parse("1/1/24, 10:00 - Alice: see https://example.com\n")?;
/// let stats = fetch_stats(&Selection::Overall, &records, |text| {
///     text.split_whitespace()
///         .filter(|t| t.starts_with("https://"))
///         .map(str::to_string)
///         .collect()
/// });
///
/// assert_eq!(stats.messages, 1);
/// assert_eq!(stats.words, 2);
/// assert_eq!(stats.links, 1);
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub fn fetch_stats<F>(selection: &Selection, records: &[Record], extract_links: F) -> ChatStats
where
    F: Fn(&str) -> Vec<String>,
{
    let mut stats = ChatStats::default();
    for record in selection.scope(records) {
        stats.messages += 1;
        stats.words += record.message.split_whitespace().count();
        if record.is_media() {
            stats.media += 1;
        }
        stats.links += extract_links(&record.message).len();
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{GROUP_NOTIFICATION, MEDIA_OMITTED};
    use chrono::NaiveDate;

    fn record(author: &str, message: &str) -> Record {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Record::new(ts, author, message)
    }

    fn no_links(_: &str) -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn test_fetch_stats_counts_everything() {
        let records = vec![
            record("Alice", "Hello"),
            record("Bob", "Hi there"),
            record("Alice", MEDIA_OMITTED),
            record(GROUP_NOTIFICATION, "Alice added Bob"),
        ];
        let stats = fetch_stats(&Selection::Overall, &records, no_links);

        // Notifications and media placeholders stay in the totals.
        assert_eq!(stats.messages, 4);
        assert_eq!(stats.words, 1 + 2 + 2 + 3);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 0);
    }

    #[test]
    fn test_fetch_stats_scoped_to_author() {
        let records = vec![
            record("Alice", "one two three"),
            record("Bob", "four"),
        ];
        let stats = fetch_stats(&Selection::from_label("Alice"), &records, no_links);

        assert_eq!(stats.messages, 1);
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_fetch_stats_uses_injected_extractor() {
        let records = vec![record("Alice", "https://a.example https://b.example")];
        let stats = fetch_stats(&Selection::Overall, &records, |text| {
            text.split_whitespace().map(str::to_string).collect()
        });
        assert_eq!(stats.links, 2);
    }

    #[test]
    fn test_fetch_stats_empty_scope_is_zero() {
        let stats = fetch_stats(&Selection::Overall, &[], no_links);
        assert_eq!(stats, ChatStats::default());

        let records = vec![record("Alice", "hi")];
        let stats = fetch_stats(&Selection::from_label("Nobody"), &records, no_links);
        assert_eq!(stats.messages, 0);
    }
}
