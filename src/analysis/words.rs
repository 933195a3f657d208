//! Stop-word-filtered word frequency ranking.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::{Selection, Tally};
use crate::error::Result;
use crate::record::Record;

/// How many ranked words [`most_common_words`] returns at most.
pub const TOP_WORDS: usize = 20;

/// Externally supplied stop-word set, one word per line.
///
/// Lookups are against the lowercased form; the word ranking lowercases its
/// tokens before checking.
///
/// # Example
///
/// ```
/// use chatlens::analysis::StopWords;
///
/// let stop = StopWords::from_text("the\nand\na\n");
/// assert!(stop.contains("the"));
/// assert!(!stop.contains("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty set: nothing is filtered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from newline-delimited text. Lines are trimmed and
    /// lowercased; blank lines are skipped.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self { words }
    }

    /// Reads the set from a plain-text resource file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Returns `true` if the (lowercase) word is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no stop words are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Top-20 words by frequency for the selection.
///
/// Media placeholder messages and system notifications are excluded, tokens
/// are lowercased and whitespace-split, stop words are dropped. Ties keep
/// first-encountered order so results reproduce across runs.
pub fn most_common_words(
    selection: &Selection,
    records: &[Record],
    stop_words: &StopWords,
) -> Vec<(String, u64)> {
    let mut tally = Tally::new();
    for record in selection
        .scope_participants(records)
        .filter(|r| !r.is_media())
    {
        for token in record.message.split_whitespace() {
            let word = token.to_lowercase();
            if !stop_words.contains(&word) {
                tally.add(&word);
            }
        }
    }
    tally
        .into_descending()
        .into_iter()
        .take(TOP_WORDS)
        .collect()
}
