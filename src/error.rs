//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatLensError`] enum that covers all error
//! cases in the library, plus a crate-wide [`Result`] alias.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Parsing is all-or-nothing: a chat export that does not match either known
//! timestamp dialect, or that carries a timestamp chrono cannot parse, fails
//! the whole document. No partial record tables are produced.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatLensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatLensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The stop-word resource can't be read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input text contains no timestamp delimiters for the selected
    /// dialect.
    ///
    /// The dialect detector commits to one timestamp variant for the whole
    /// document; if that variant then matches nothing, the input is not a
    /// recognizable chat export. This is a hard failure for the document,
    /// never retried with the other dialect.
    #[error("input does not match the {dialect} export format: no timestamp delimiters found")]
    UnrecognizedFormat {
        /// Human-readable name of the dialect that was tried
        dialect: &'static str,
    },

    /// A delimiter-matched timestamp substring failed to parse.
    ///
    /// The delimiter regex already vets the shape of the timestamp, so this
    /// only fires on calendar-invalid values (e.g. a four-digit year where
    /// the dialect expects two digits, or day 32). Treated as a fatal parse
    /// failure for the whole document, not skipped per row.
    #[error("failed to parse timestamp '{text}': {source}")]
    Timestamp {
        /// The timestamp substring that failed to parse
        text: String,
        /// The underlying chrono parse error
        #[source]
        source: chrono::format::ParseError,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing the structured report.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatLensError {
    /// Creates an unrecognized-format error for the given dialect name.
    pub fn unrecognized_format(dialect: &'static str) -> Self {
        ChatLensError::UnrecognizedFormat { dialect }
    }

    /// Creates a timestamp parse error.
    pub fn timestamp(text: impl Into<String>, source: chrono::format::ParseError) -> Self {
        ChatLensError::Timestamp {
            text: text.into(),
            source,
        }
    }
}
