//! The normalized record table.
//!
//! This module provides [`Record`], the unit of the normalized table every
//! parsed chat line becomes, and [`Period`], the coarse six-bucket
//! time-of-day classification derived from the hour.
//!
//! # Overview
//!
//! A record consists of:
//! - **Identity**: `author` (or the [`GROUP_NOTIFICATION`] sentinel) and `message`
//! - **Time**: the original `timestamp` plus derived calendar fields
//!   (`date`, `year`, `month`, `day`, `weekday`, `hour`, `minute`, `period`)
//!
//! The table itself is a plain `Vec<Record>` in source order. The parser
//! never sorts or deduplicates: repeated identical lines produce repeated
//! records, and positions follow the chronological export order of the
//! input. Aggregation queries take the table by shared reference and build
//! private views; nothing downstream mutates it.
//!
//! # Example
//!
//! ```
//! use chatlens::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let record = Record::new(ts, "Alice", "Hello");
//!
//! assert_eq!(record.month, "January");
//! assert_eq!(record.weekday, "Monday");
//! assert_eq!(record.period.as_str(), "Morning");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Sentinel author assigned to system notifications.
///
/// Join/leave/subject-change notices have no `name: ` prefix in the export;
/// the extractor tags them with this author instead of a participant name.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Placeholder body WhatsApp writes for media the export omitted.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Coarse time-of-day bucket, a pure function of the hour.
///
/// Variants are declared in chronological order, so the discriminant doubles
/// as the column index of the weekly heatmap.
///
/// | hour range | bucket |
/// |---|---|
/// | [0,4) | Late Night |
/// | [4,8) | Early Morning |
/// | [8,12) | Morning |
/// | [12,17) | Afternoon |
/// | [17,21) | Evening |
/// | [21,24) | Night |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Period {
    /// Hours 0-3
    #[serde(rename = "Late Night")]
    LateNight,
    /// Hours 4-7
    #[serde(rename = "Early Morning")]
    EarlyMorning,
    /// Hours 8-11
    #[serde(rename = "Morning")]
    Morning,
    /// Hours 12-16
    #[serde(rename = "Afternoon")]
    Afternoon,
    /// Hours 17-20
    #[serde(rename = "Evening")]
    Evening,
    /// Hours 21-23
    #[serde(rename = "Night")]
    Night,
}

impl Period {
    /// All six buckets in chronological order.
    pub const ALL: [Period; 6] = [
        Period::LateNight,
        Period::EarlyMorning,
        Period::Morning,
        Period::Afternoon,
        Period::Evening,
        Period::Night,
    ];

    /// Maps an hour of day (0-23) to its bucket.
    ///
    /// Total over the valid range; hours past 23 cannot come out of chrono
    /// and fold into [`Period::Night`].
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=3 => Period::LateNight,
            4..=7 => Period::EarlyMorning,
            8..=11 => Period::Morning,
            12..=16 => Period::Afternoon,
            17..=20 => Period::Evening,
            _ => Period::Night,
        }
    }

    /// Returns the display name of the bucket.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::LateNight => "Late Night",
            Period::EarlyMorning => "Early Morning",
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Evening => "Evening",
            Period::Night => "Night",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized row of the record table.
///
/// Produced by the parse pipeline from a single timestamp-delimited entry.
/// All calendar fields are derived from `timestamp` with plain calendar
/// arithmetic; timestamps are local wall-clock values and are never
/// converted to UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Author name, or [`GROUP_NOTIFICATION`] for system notices.
    pub author: String,

    /// Message body. May equal [`MEDIA_OMITTED`] for omitted media, and may
    /// contain internal newlines for multiline messages.
    pub message: String,

    /// Original date-time of the entry.
    pub timestamp: NaiveDateTime,

    /// Calendar date (no time component).
    pub date: NaiveDate,

    /// Calendar year.
    pub year: i32,

    /// English month name ("January" .. "December").
    pub month: String,

    /// Day of month, 1-31.
    pub day: u32,

    /// English weekday name ("Monday" .. "Sunday").
    pub weekday: String,

    /// Hour of day, 0-23.
    pub hour: u32,

    /// Minute of hour, 0-59.
    pub minute: u32,

    /// Time-of-day bucket derived from `hour`.
    pub period: Period,
}

impl Record {
    /// Builds a record, deriving every calendar field from the timestamp.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let date = timestamp.date();
        Self {
            author: author.into(),
            message: message.into(),
            date,
            year: date.year(),
            month: timestamp.format("%B").to_string(),
            day: date.day(),
            weekday: timestamp.format("%A").to_string(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            period: Period::from_hour(timestamp.hour()),
            timestamp,
        }
    }

    /// Returns `true` if this record is a system notification.
    pub fn is_notification(&self) -> bool {
        self.author == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is the omitted-media placeholder.
    pub fn is_media(&self) -> bool {
        self.message == MEDIA_OMITTED
    }
}
