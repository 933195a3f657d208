//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat-log exports into a normalized
//! record table and computing descriptive statistics over it.
//!
//! ## Overview
//!
//! WhatsApp text exports come as one semi-structured blob with two timestamp
//! dialects (12-hour with an AM/PM marker, or 24-hour). Chatlens detects the
//! dialect, splits the blob into timestamp-delimited entries, separates
//! authors from bodies (tagging system notifications), and expands each
//! entry into a [`Record`] with full calendar fields and a time-of-day
//! bucket.
//!
//! On top of the table, the [`analysis`] module offers independent,
//! stateless queries: totals, daily/monthly timelines, weekday and month
//! activity maps, a weekday-by-period heatmap, busiest-user ranking, word
//! and emoji frequency tables, and a sentiment distribution driven by an
//! externally supplied scorer.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::analysis::{Selection, fetch_stats, most_busy_users};
//! use chatlens::parse;
//!
//! fn main() -> chatlens::Result<()> {
//!     let log = "1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi there\n";
//!     let records = parse(log)?;
//!
//!     let stats = fetch_stats(&Selection::Overall, &records, |_| Vec::new());
//!     assert_eq!(stats.messages, 2);
//!
//!     let busiest = most_busy_users(&records);
//!     assert_eq!(busiest.top.len(), 2);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline and Ownership
//!
//! Data flows one way: raw text → entries → record table → queries. The
//! table is a plain `Vec<Record>` in source order, owned by whoever called
//! [`parse`]; every query borrows it immutably and builds private views, so
//! queries are independent and may run side by side over one snapshot.
//!
//! ## Module Structure
//!
//! - [`parser`] — parse pipeline ([`parse`], [`parse_with_dialect`], [`parse_file`])
//! - [`dialect`] — timestamp dialect detection ([`Dialect`])
//! - [`record`] — the normalized table ([`Record`], [`Period`], sentinels)
//! - [`analysis`] — aggregation queries ([`Selection`](analysis::Selection) and friends)
//! - [`cli`] — CLI argument types (feature `cli`)
//! - [`error`] — unified error types ([`ChatLensError`], [`Result`])
//! - [`prelude`] — convenient re-exports
//!
//! ## Known Limitations
//!
//! - One dialect decision per document; mixed-dialect exports are not
//!   supported.
//! - Author extraction splits at the first `": "`, so an unauthored line
//!   containing an early colon misparses. This matches the reference
//!   behavior on purpose; see [`parser`] for details.

#[cfg(feature = "cli")]
pub mod cli;

pub mod analysis;
pub mod dialect;
pub mod error;
pub mod parser;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use dialect::Dialect;
pub use error::{ChatLensError, Result};
pub use parser::{parse, parse_file, parse_with_dialect};
pub use record::{GROUP_NOTIFICATION, MEDIA_OMITTED, Period, Record};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record types
    pub use crate::record::{GROUP_NOTIFICATION, MEDIA_OMITTED, Period, Record};

    // Error types
    pub use crate::error::{ChatLensError, Result};

    // Parse pipeline
    pub use crate::dialect::Dialect;
    pub use crate::parser::{parse, parse_file, parse_with_dialect};

    // Aggregation queries
    pub use crate::analysis::{
        ActivityHeatmap, BusyUsers, ChatStats, DailyCount, MonthlyCount, Selection,
        SentimentCategory, SentimentCount, StopWords, UserShare, daily_timeline, emoji_summary,
        fetch_stats, month_activity_map, monthly_timeline, most_busy_users, most_common_words,
        sentiment_distribution, week_activity_map, weekly_heatmap,
    };
}
