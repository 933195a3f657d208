//! Busiest-user ranking.

use serde::Serialize;

use super::{Tally, round2};
use crate::record::Record;

/// How many authors the headline ranking keeps.
const TOP_USERS: usize = 5;

/// One author's share of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    /// Author name.
    pub author: String,
    /// Messages sent by this author.
    pub messages: u64,
    /// Share of all participant messages, `count / total * 100` rounded
    /// half-up to two decimals.
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BusyUsers {
    /// Up to five busiest authors with raw counts, descending; ties keep
    /// first-encountered order.
    pub top: Vec<(String, u64)>,
    /// Percentage-share table for every author, same ordering.
    pub shares: Vec<UserShare>,
}

/// Ranks every participant by message count over the whole table.
///
/// Always whole-table scope (this query has no author filter; filtering a
/// ranking of users by one user is meaningless). System notifications never
/// count toward anyone.
///
/// # Example
///
/// ```
/// use chatlens::analysis::most_busy_users;
/// use chatlens::parse;
///
/// let records = parse(
///     "1/1/24, 10:00 - Alice: one\n\
///      1/1/24, 10:01 - Alice: two\n\
///      1/1/24, 10:02 - Bob: three\n",
/// )?;
/// let busiest = most_busy_users(&records);
///
/// assert_eq!(busiest.top[0], ("Alice".to_string(), 2));
/// assert_eq!(busiest.shares[0].percent, 66.67);
/// assert_eq!(busiest.shares[1].percent, 33.33);
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub fn most_busy_users(records: &[Record]) -> BusyUsers {
    let mut tally = Tally::new();
    for record in records.iter().filter(|r| !r.is_notification()) {
        tally.add(&record.author);
    }

    let ranked = tally.into_descending();
    let total: u64 = ranked.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return BusyUsers::default();
    }

    let shares = ranked
        .iter()
        .map(|(author, messages)| UserShare {
            author: author.clone(),
            messages: *messages,
            percent: round2(*messages as f64 / total as f64 * 100.0),
        })
        .collect();
    let top = ranked.into_iter().take(TOP_USERS).collect();

    BusyUsers { top, shares }
}
