//! Daily and monthly message timelines.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::Selection;
use crate::record::Record;

/// Message count for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// The calendar date.
    pub date: NaiveDate,
    /// Messages on that date.
    pub messages: u64,
}

/// Message count for one (year, month) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// Calendar year.
    pub year: i32,
    /// English month name.
    pub month: String,
    /// Composite `"Month-Year"` label, e.g. `"January-2024"`.
    pub label: String,
    /// Messages in that month.
    pub messages: u64,
}

/// Message counts grouped by date, ascending.
pub fn daily_timeline(selection: &Selection, records: &[Record]) -> Vec<DailyCount> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in selection.scope_participants(records) {
        *counts.entry(record.date).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}

/// Message counts grouped by (year, month), chronological.
///
/// Each row carries a `"Month-Year"` label ready for axis ticks downstream.
pub fn monthly_timeline(selection: &Selection, records: &[Record]) -> Vec<MonthlyCount> {
    // Key on the month number for chronological order; the display name
    // comes along from the first record seen in that month.
    let mut counts: BTreeMap<(i32, u32), (u64, String)> = BTreeMap::new();
    for record in selection.scope_participants(records) {
        let entry = counts
            .entry((record.year, record.timestamp.month()))
            .or_insert_with(|| (0, record.month.clone()));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .map(|((year, _), (messages, month))| MonthlyCount {
            year,
            label: format!("{month}-{year}"),
            month,
            messages,
        })
        .collect()
}
