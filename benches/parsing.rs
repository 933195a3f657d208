//! Benchmarks for chatlens parsing and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::analysis::{
    Selection, StopWords, emoji_summary, fetch_stats, most_busy_users, most_common_words,
    weekly_heatmap,
};
use chatlens::{Dialect, parse, parse_with_dialect};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_twenty_four_hour_log(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let hour = (i / 60) % 24;
        let minute = i % 60;
        let day = 1 + (i / 1440) % 28;
        lines.push(format!(
            "{day}/1/24, {hour:02}:{minute:02} - {sender}: Message number {i} with a few words 🎉"
        ));
    }
    lines.join("\n")
}

fn generate_twelve_hour_log(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let hour = 1 + i % 12;
        let minute = i % 60;
        let meridiem = if i % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "1/1/24, {hour}:{minute:02} {meridiem} - {sender}: Message number {i}"
        ));
    }
    lines.join("\n")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for count in [100, 1_000, 10_000] {
        let log_24 = generate_twenty_four_hour_log(count);
        group.throughput(Throughput::Bytes(log_24.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("twenty_four_hour", count),
            &log_24,
            |b, log| b.iter(|| parse_with_dialect(black_box(log), Dialect::TwentyFourHour)),
        );

        let log_12 = generate_twelve_hour_log(count);
        group.throughput(Throughput::Bytes(log_12.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("twelve_hour", count),
            &log_12,
            |b, log| b.iter(|| parse_with_dialect(black_box(log), Dialect::TwelveHour)),
        );
    }

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let log = generate_twelve_hour_log(10_000);
    c.bench_function("detect_dialect_10k", |b| {
        b.iter(|| Dialect::detect(black_box(&log)));
    });
}

fn bench_aggregations(c: &mut Criterion) {
    let log = generate_twenty_four_hour_log(10_000);
    let records = parse(&log).expect("benchmark log parses");
    let overall = Selection::Overall;
    let stop = StopWords::from_text("a\nthe\nwith\nfew\n");

    let mut group = c.benchmark_group("aggregate_10k");
    group.bench_function("fetch_stats", |b| {
        b.iter(|| fetch_stats(&overall, black_box(&records), |_| Vec::new()));
    });
    group.bench_function("most_busy_users", |b| {
        b.iter(|| most_busy_users(black_box(&records)));
    });
    group.bench_function("most_common_words", |b| {
        b.iter(|| most_common_words(&overall, black_box(&records), &stop));
    });
    group.bench_function("emoji_summary", |b| {
        b.iter(|| emoji_summary(&overall, black_box(&records)));
    });
    group.bench_function("weekly_heatmap", |b| {
        b.iter(|| weekly_heatmap(&overall, black_box(&records)));
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_detection, bench_aggregations);
criterion_main!(benches);
