//! Weekday/month activity maps and the weekday-by-period heatmap.

use chrono::Datelike;
use serde::Serialize;

use super::{Selection, Tally};
use crate::record::{Period, Record};

/// Weekday names in Monday-first row order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Message counts per weekday name, busiest first.
///
/// Only weekdays present in the data appear; absent days are not zero-filled.
pub fn week_activity_map(selection: &Selection, records: &[Record]) -> Vec<(String, u64)> {
    let mut tally = Tally::new();
    for record in selection.scope_participants(records) {
        tally.add(&record.weekday);
    }
    tally.into_descending()
}

/// Message counts per month name, busiest first.
pub fn month_activity_map(selection: &Selection, records: &[Record]) -> Vec<(String, u64)> {
    let mut tally = Tally::new();
    for record in selection.scope_participants(records) {
        tally.add(&record.month);
    }
    tally.into_descending()
}

/// Weekday-by-period activity matrix.
///
/// Rows follow [`WEEKDAYS`] (Monday first), columns follow [`Period::ALL`]
/// (chronological). Combinations with no messages hold zero, so the shape is
/// always 7×6 regardless of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    /// Row labels, Monday first.
    pub weekdays: [&'static str; 7],
    /// Column labels, chronological period order.
    pub periods: [Period; 6],
    /// `counts[row][column]` = messages on that weekday in that period.
    pub counts: [[u64; 6]; 7],
}

impl ActivityHeatmap {
    /// Returns the cell for a weekday row and period column.
    pub fn count(&self, weekday: usize, period: Period) -> u64 {
        self.counts[weekday][period as usize]
    }

    /// Total messages across the matrix.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}

/// Builds the 7×6 weekday-by-period heatmap for the selection.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{Selection, weekly_heatmap};
/// use chatlens::{Period, parse};
///
/// // 2024-01-15 is a Monday; 10:00 falls in the Morning bucket.
/// let records = parse("15/1/24, 10:00 - Alice: Hello\n")?;
/// let heatmap = weekly_heatmap(&Selection::Overall, &records);
///
/// assert_eq!(heatmap.count(0, Period::Morning), 1);
/// assert_eq!(heatmap.total(), 1);
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub fn weekly_heatmap(selection: &Selection, records: &[Record]) -> ActivityHeatmap {
    let mut counts = [[0u64; 6]; 7];
    for record in selection.scope_participants(records) {
        let row = record.timestamp.weekday().num_days_from_monday() as usize;
        counts[row][record.period as usize] += 1;
    }
    ActivityHeatmap {
        weekdays: WEEKDAYS,
        periods: Period::ALL,
        counts,
    }
}
