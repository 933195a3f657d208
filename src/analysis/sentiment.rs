//! Sentiment category distribution.
//!
//! The scoring model lives outside the crate: callers inject a function
//! mapping message text to a score in `[-1.0, 1.0]`, and this module maps
//! scores onto five ordered categories and groups the counts per month.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;
use serde::Serialize;

use super::Selection;
use crate::record::Record;

/// Five ordered sentiment categories with fixed score breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SentimentCategory {
    /// Score >= 0.5
    #[serde(rename = "Very Positive")]
    VeryPositive,
    /// Score >= 0.1
    #[serde(rename = "Positive")]
    Positive,
    /// Score >= -0.1
    #[serde(rename = "Neutral")]
    Neutral,
    /// Score >= -0.5
    #[serde(rename = "Negative")]
    Negative,
    /// Everything below
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl SentimentCategory {
    /// Maps a score in `[-1.0, 1.0]` to its category.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            SentimentCategory::VeryPositive
        } else if score >= 0.1 {
            SentimentCategory::Positive
        } else if score >= -0.1 {
            SentimentCategory::Neutral
        } else if score >= -0.5 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::VeryNegative
        }
    }

    /// Returns the display name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentCategory::VeryPositive => "Very Positive",
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message count for one (month, sentiment category) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    /// Abbreviated `"Mon YYYY"` label, e.g. `"Jan 2024"`.
    pub label: String,
    /// The sentiment category.
    pub category: SentimentCategory,
    /// Messages in that month with that category.
    pub count: u64,
}

/// Message counts grouped by month and sentiment category, chronological.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{Selection, SentimentCategory, sentiment_distribution};
/// use chatlens::parse;
///
/// let records = parse("1/1/24, 10:00 - Alice: great day!\n")?;
/// let counts = sentiment_distribution(&Selection::Overall, &records, |_| 0.8);
///
/// assert_eq!(counts[0].label, "Jan 2024");
/// assert_eq!(counts[0].category, SentimentCategory::VeryPositive);
/// assert_eq!(counts[0].count, 1);
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub fn sentiment_distribution<F>(
    selection: &Selection,
    records: &[Record],
    score: F,
) -> Vec<SentimentCount>
where
    F: Fn(&str) -> f64,
{
    // Chronological keys; the label comes along from the first record seen
    // in each cell.
    let mut counts: BTreeMap<(i32, u32, SentimentCategory), (u64, String)> = BTreeMap::new();
    for record in selection.scope_participants(records) {
        let category = SentimentCategory::from_score(score(&record.message));
        let key = (record.year, record.timestamp.month(), category);
        let entry = counts
            .entry(key)
            .or_insert_with(|| (0, record.timestamp.format("%b %Y").to_string()));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .map(|((_, _, category), (count, label))| SentimentCount {
            label,
            category,
            count,
        })
        .collect()
}
