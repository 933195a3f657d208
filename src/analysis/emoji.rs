//! Emoji frequency table.

use regex::Regex;

use super::{Selection, Tally};
use crate::record::Record;

/// Single emoji characters.
///
/// `Emoji_Presentation` covers characters that render as emoji by default;
/// `Extended_Pictographic` picks up the pictographs that need a variation
/// selector. Counting is per character, so a ZWJ family sequence counts its
/// member emoji individually.
const EMOJI_PATTERN: &str = r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]";

/// Frequency table of every emoji character in scope, descending by count;
/// ties keep first-encountered order.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{Selection, emoji_summary};
/// use chatlens::parse;
///
/// let records = parse("1/1/24, 10:00 - Alice: nice 🔥🔥🎉\n")?;
/// let summary = emoji_summary(&Selection::Overall, &records);
///
/// assert_eq!(summary[0], ("🔥".to_string(), 2));
/// assert_eq!(summary[1], ("🎉".to_string(), 1));
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub fn emoji_summary(selection: &Selection, records: &[Record]) -> Vec<(String, u64)> {
    let emoji = Regex::new(EMOJI_PATTERN).unwrap();
    let mut tally = Tally::new();
    for record in selection.scope_participants(records) {
        for found in emoji.find_iter(&record.message) {
            tally.add(found.as_str());
        }
    }
    tally.into_descending()
}
