//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use regex::Regex;
use serde::Serialize;

use chatlens::analysis::{
    ActivityHeatmap, BusyUsers, ChatStats, Selection, StopWords, daily_timeline, emoji_summary,
    fetch_stats, most_busy_users, most_common_words, week_activity_map, weekly_heatmap,
};
use chatlens::cli::{Args, ReportFormat};
use chatlens::{ChatLensError, Dialect, parse_with_dialect};

/// URL matcher for the link count. The library leaves URL extraction to its
/// caller; this is the CLI's implementation of that contract.
const URL_PATTERN: &str = r"https?://\S+";

/// Everything the CLI computes, in one serializable bundle.
#[derive(Debug, Serialize)]
struct Report {
    user: String,
    records: usize,
    stats: ChatStats,
    busy_users: BusyUsers,
    week_activity: Vec<(String, u64)>,
    heatmap: ActivityHeatmap,
    common_words: Vec<(String, u64)>,
    emoji: Vec<(String, u64)>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatLensError> {
    let args = <Args as ClapParser>::parse();
    let selection = Selection::from_label(&args.user);

    // Print header
    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("👤 User:    {}", selection.label());
    println!();

    let stop_words = match &args.stop_words {
        Some(path) => StopWords::from_file(Path::new(path))?,
        None => StopWords::new(),
    };

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let text = std::fs::read_to_string(&args.input)?;
    let dialect = Dialect::detect(&text);
    let records = parse_with_dialect(&text, dialect)?;
    println!(
        "   Found {} records ({} dialect, {:.2}s)",
        records.len(),
        dialect,
        parse_start.elapsed().as_secs_f64()
    );

    let url = Regex::new(URL_PATTERN).unwrap();
    let extract_links =
        |text: &str| -> Vec<String> { url.find_iter(text).map(|m| m.as_str().to_string()).collect() };

    let report = Report {
        user: selection.label().to_string(),
        records: records.len(),
        stats: fetch_stats(&selection, &records, extract_links),
        busy_users: most_busy_users(&records),
        week_activity: week_activity_map(&selection, &records),
        heatmap: weekly_heatmap(&selection, &records),
        common_words: most_common_words(&selection, &records, &stop_words),
        emoji: emoji_summary(&selection, &records),
    };

    match args.format {
        ReportFormat::Text => print_text_report(&args, &selection, &records, &report),
        ReportFormat::Json => print_json_report(&report)?,
    }

    Ok(())
}

fn print_text_report(
    args: &Args,
    selection: &Selection,
    records: &[chatlens::Record],
    report: &Report,
) {
    println!();
    println!("📊 Totals");
    println!("   Messages: {}", report.stats.messages);
    println!("   Words:    {}", report.stats.words);
    println!("   Media:    {}", report.stats.media);
    println!("   Links:    {}", report.stats.links);

    let timeline = daily_timeline(selection, records);
    if let (Some(first), Some(last)) = (timeline.first(), timeline.last()) {
        println!();
        println!("📅 Active from {} to {}", first.date, last.date);
    }

    if !report.busy_users.top.is_empty() {
        println!();
        println!("🏆 Busiest users (whole chat)");
        for share in report.busy_users.shares.iter().take(args.top) {
            println!(
                "   {:<20} {:>6} messages  {:>6.2}%",
                share.author, share.messages, share.percent
            );
        }
    }

    if !report.week_activity.is_empty() {
        println!();
        println!("🗓️  Week activity");
        for (weekday, count) in &report.week_activity {
            println!("   {:<10} {}", weekday, count);
        }
    }

    if !report.common_words.is_empty() {
        println!();
        println!("📝 Top words");
        for (word, count) in report.common_words.iter().take(args.top) {
            println!("   {:<20} {}", word, count);
        }
    }

    if !report.emoji.is_empty() {
        println!();
        println!("😀 Top emoji");
        for (emoji, count) in report.emoji.iter().take(args.top) {
            println!("   {}  {}", emoji, count);
        }
    }

    println!();
    println!("✅ Done");
}

#[cfg(feature = "json-output")]
fn print_json_report(report: &Report) -> Result<(), ChatLensError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(not(feature = "json-output"))]
fn print_json_report(_report: &Report) -> Result<(), ChatLensError> {
    eprintln!("this binary was built without the json-output feature");
    process::exit(1);
}
