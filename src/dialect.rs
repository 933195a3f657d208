//! Timestamp dialect detection.
//!
//! WhatsApp text exports come in two timestamp variants depending on the
//! device's clock settings: 12-hour with an AM/PM marker, or 24-hour.
//! [`Dialect::detect`] decides between them once for the whole document with
//! a threshold vote; the chosen dialect is then passed explicitly into the
//! splitter. Mixed-dialect documents are not supported.

use std::fmt;

use regex::Regex;

/// Pattern for a 12-hour-style time: `H:MM` followed by an AM/PM marker.
const MERIDIEM_TIME: &str = r"\d{1,2}:\d{2}\s[AaPp][Mm]";

/// Minimum meridiem sightings before the document counts as 12-hour.
///
/// Export headers or quoted content can produce one or two stray matches in
/// a 24-hour log; three keeps that noise from flipping the decision.
const MERIDIEM_THRESHOLD: usize = 3;

/// The two supported timestamp/delimiter formats.
///
/// # Example
///
/// ```
/// use chatlens::Dialect;
///
/// let log = "1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi\n";
/// assert_eq!(Dialect::detect(log), Dialect::TwentyFourHour);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `1/1/24, 9:00 AM - Sender: Message`
    TwelveHour,
    /// `1/1/24, 21:00 - Sender: Message`
    TwentyFourHour,
}

impl Dialect {
    /// Detects the dialect of a whole document.
    ///
    /// Counts 12-hour-style time occurrences anywhere in the text; at least
    /// three of them select [`Dialect::TwelveHour`], otherwise
    /// [`Dialect::TwentyFourHour`]. One global decision per document.
    pub fn detect(text: &str) -> Dialect {
        let meridiem = Regex::new(MERIDIEM_TIME).unwrap();
        if meridiem.find_iter(text).count() >= MERIDIEM_THRESHOLD {
            Dialect::TwelveHour
        } else {
            Dialect::TwentyFourHour
        }
    }

    /// Returns the entry delimiter pattern for this dialect.
    ///
    /// Capture group 1 is the timestamp substring; the match itself extends
    /// over the trailing ` - ` separator so entry bodies start clean.
    pub(crate) fn delimiter_pattern(self) -> &'static str {
        match self {
            // 1/1/24, 9:00 AM -
            Dialect::TwelveHour => {
                r"(\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s[AaPp][Mm])\s-\s"
            }
            // 1/1/24, 21:00 -
            Dialect::TwentyFourHour => r"(\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2})\s-\s",
        }
    }

    /// Returns the chrono format string matching this dialect's timestamps.
    ///
    /// Day-first with a two-digit year, as the export writes them.
    pub(crate) fn timestamp_format(self) -> &'static str {
        match self {
            Dialect::TwelveHour => "%d/%m/%y, %I:%M %p",
            Dialect::TwentyFourHour => "%d/%m/%y, %H:%M",
        }
    }

    /// Returns the human-readable dialect name.
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::TwelveHour => "12-hour",
            Dialect::TwentyFourHour => "24-hour",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_twelve_hour() {
        let text = "1/1/24, 9:00 AM - Alice: Hello\n\
                    1/1/24, 12:30 PM - Bob: Lunch?\n\
                    1/1/24, 9:15 PM - Alice: Good night\n";
        assert_eq!(Dialect::detect(text), Dialect::TwelveHour);
    }

    #[test]
    fn test_detect_twenty_four_hour() {
        let text = "1/1/24, 09:00 - Alice: Hello\n\
                    1/1/24, 21:00 - Bob: Hi\n";
        assert_eq!(Dialect::detect(text), Dialect::TwentyFourHour);
    }

    #[test]
    fn test_detection_threshold() {
        // Two stray AM/PM mentions inside message bodies are noise, not
        // enough to flip a 24-hour export.
        let noisy = "1/1/24, 09:00 - Alice: meet at 9:00 AM sharp\n\
                     1/1/24, 10:00 - Bob: or 10:30 AM?\n";
        assert_eq!(Dialect::detect(noisy), Dialect::TwentyFourHour);

        let third = format!("{noisy}1/1/24, 11:00 - Alice: fine, 11:00 AM\n");
        assert_eq!(Dialect::detect(&third), Dialect::TwelveHour);
    }

    #[test]
    fn test_detect_case_insensitive_meridiem() {
        let text = "1/1/24, 9:00 am - A: x\n1/1/24, 9:01 pm - B: y\n1/1/24, 9:02 Am - C: z\n";
        assert_eq!(Dialect::detect(text), Dialect::TwelveHour);
    }

    #[test]
    fn test_detect_empty_defaults_to_twenty_four_hour() {
        assert_eq!(Dialect::detect(""), Dialect::TwentyFourHour);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dialect::TwelveHour.to_string(), "12-hour");
        assert_eq!(Dialect::TwentyFourHour.to_string(), "24-hour");
    }
}
