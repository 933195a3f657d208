//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - report output options
//!
//! `ReportFormat` is usable outside of CLI context:
//!
//! ```rust
//! use chatlens::cli::ReportFormat;
//!
//! let format = ReportFormat::Json;
//! println!("Format: {}", format); // "JSON"
//! ```

use clap::{Parser, ValueEnum};

/// Analyze a WhatsApp chat export: message totals, activity maps,
/// busiest users, and word/emoji rankings.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --stop-words stop_words.txt --top 10
    chatlens chat.txt --format json")]
pub struct Args {
    /// Path to the exported chat text file
    pub input: String,

    /// Restrict the report to one author ("Overall" means everyone)
    #[arg(short, long, default_value = "Overall", value_name = "NAME")]
    pub user: String,

    /// Newline-delimited stop-word file for the word ranking
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<String>,

    /// Rows to print per ranked table
    #[arg(long, default_value_t = 10, value_name = "N")]
    pub top: usize,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

/// Report output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReportFormat {
    /// Human-readable console report (default)
    #[default]
    Text,

    /// Structured JSON report (requires the `json-output` feature)
    Json,
}

impl ReportFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json"]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::Text.to_string(), "text");
        assert_eq!(ReportFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::try_parse_from(["chatlens", "chat.txt"]).unwrap();
        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.user, "Overall");
        assert_eq!(args.top, 10);
        assert_eq!(args.format, ReportFormat::Text);
        assert!(args.stop_words.is_none());
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::try_parse_from([
            "chatlens",
            "chat.txt",
            "--user",
            "Alice",
            "--stop-words",
            "stop.txt",
            "--top",
            "5",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.user, "Alice");
        assert_eq!(args.stop_words.as_deref(), Some("stop.txt"));
        assert_eq!(args.top, 5);
        assert_eq!(args.format, ReportFormat::Json);
    }
}
