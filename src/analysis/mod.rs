//! Aggregation queries over the record table.
//!
//! This module contains:
//! - [`Selection`] - the shared author-scope wrapper every query goes through
//! - [`stats`] - message/word/media/link totals
//! - [`timeline`] - daily and monthly message timelines
//! - [`activity`] - weekday/month activity maps and the weekly heatmap
//! - [`users`] - busiest-user ranking with percentage shares
//! - [`words`] - stop-word-filtered word frequency ranking
//! - [`emoji`] - emoji frequency table
//! - [`sentiment`] - sentiment category distribution per month
//!
//! Every query is stateless and takes the table by shared reference; none
//! mutates it, so queries are independent and safe to run side by side over
//! one immutable snapshot. All queries drop system notifications except
//! [`stats::fetch_stats`], which counts them like the export does.
//!
//! On an empty table, or a selection that matches nothing, every query
//! returns an empty or zero-valued result rather than erroring.
//!
//! # Quick Start
//!
//! ```
//! use chatlens::analysis::{Selection, fetch_stats, most_busy_users, week_activity_map};
//! use chatlens::parse;
//!
//! let records = parse("1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi there\n")?;
//!
//! let overall = Selection::Overall;
//! let stats = fetch_stats(&overall, &records, |_| Vec::new());
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.words, 3);
//!
//! let busiest = most_busy_users(&records);
//! assert_eq!(busiest.top.len(), 2);
//! # Ok::<(), chatlens::ChatLensError>(())
//! ```

pub mod activity;
pub mod emoji;
pub mod sentiment;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

use std::collections::HashMap;

use crate::record::Record;

// Re-export the query surface for convenience
pub use activity::{ActivityHeatmap, month_activity_map, week_activity_map, weekly_heatmap};
pub use emoji::emoji_summary;
pub use sentiment::{SentimentCategory, SentimentCount, sentiment_distribution};
pub use stats::{ChatStats, fetch_stats};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, UserShare, most_busy_users};
pub use words::{StopWords, most_common_words};

/// Label that selects the whole table instead of one author.
pub const OVERALL: &str = "Overall";

/// Author scope shared by every aggregation query.
///
/// Rather than repeating filter logic per query, each query routes its input
/// through a `Selection`: either the whole table or an exact author match.
/// Filtering always yields a fresh view over borrowed records; the shared
/// table is never touched.
///
/// # Example
///
/// ```
/// use chatlens::analysis::Selection;
///
/// assert_eq!(Selection::from_label("Overall"), Selection::Overall);
/// assert_eq!(
///     Selection::from_label("Alice"),
///     Selection::Author("Alice".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No author filter; every record is in scope.
    #[default]
    Overall,
    /// Exact author-name match.
    Author(String),
}

impl Selection {
    /// Builds a selection from a UI-style label, where `"Overall"` means no
    /// filter and anything else is an author name.
    pub fn from_label(label: &str) -> Self {
        if label == OVERALL {
            Selection::Overall
        } else {
            Selection::Author(label.to_string())
        }
    }

    /// Returns the label this selection answers to.
    pub fn label(&self) -> &str {
        match self {
            Selection::Overall => OVERALL,
            Selection::Author(name) => name,
        }
    }

    fn matches(&self, record: &Record) -> bool {
        match self {
            Selection::Overall => true,
            Selection::Author(name) => record.author == *name,
        }
    }

    /// Iterates the records in scope, notifications included.
    pub(crate) fn scope<'a>(
        &'a self,
        records: &'a [Record],
    ) -> impl Iterator<Item = &'a Record> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }

    /// Iterates the records in scope, dropping system notifications.
    pub(crate) fn scope_participants<'a>(
        &'a self,
        records: &'a [Record],
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.scope(records).filter(|r| !r.is_notification())
    }
}

/// Frequency counter that remembers first-encounter order.
///
/// Rankings must be reproducible across runs on identical input, so ties are
/// broken by the order keys first appeared. A stable descending sort over
/// the encounter-ordered pairs gives exactly that.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    pairs: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, key: &str) {
        if let Some(&i) = self.index.get(key) {
            self.pairs[i].1 += 1;
        } else {
            self.index.insert(key.to_string(), self.pairs.len());
            self.pairs.push((key.to_string(), 1));
        }
    }

    /// Consumes the tally into (key, count) pairs, highest count first,
    /// ties in first-encounter order.
    pub(crate) fn into_descending(self) -> Vec<(String, u64)> {
        let mut pairs = self.pairs;
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

/// Rounds half away from zero to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
