//! Benchmarks for the tide line decoder
//!
//! The decoder runs once per line over yearly files for a couple of hundred
//! stations, so per-line cost dominates a full fetch. The cases cover the
//! primary fixed-offset path, the regex fallback, and outright rejection.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jma_tide_processor::app::services::tide_text_parser::{TideTextParser, decode_line};

fn well_formed_line() -> String {
    let hourly: String = (0..24).map(|hour| format!("{:3}", 100 + hour * 5)).collect();
    format!("{}26 315TK", hourly)
}

fn short_fallback_line() -> &'static str {
    "105108112115118121 26 3 5TK"
}

fn rejected_line() -> &'static str {
    "JMA ANNUAL TIDE TABLE 2026 (TOKYO)"
}

fn full_year_body() -> String {
    let mut body = String::new();
    for month in 1..=12u32 {
        for day in 1..=28u32 {
            let hourly: String = (0..24)
                .map(|hour| format!("{:3}", 90 + (hour * 7 + day as usize) % 60))
                .collect();
            body.push_str(&format!("{}{:2}{:2}{:2}TK\n", hourly, 26, month, day));
        }
    }
    body
}

fn bench_decode_line(c: &mut Criterion) {
    let well_formed = well_formed_line();

    c.bench_function("decode_well_formed_line", |b| {
        b.iter(|| decode_line(black_box(&well_formed)))
    });

    c.bench_function("decode_short_line_fallback", |b| {
        b.iter(|| decode_line(black_box(short_fallback_line())))
    });

    c.bench_function("reject_header_line", |b| {
        b.iter(|| decode_line(black_box(rejected_line())))
    });
}

fn bench_parse_year(c: &mut Criterion) {
    let parser = TideTextParser::new();
    let body = full_year_body();

    c.bench_function("parse_year_of_lines", |b| {
        b.iter(|| parser.parse_text(black_box(&body), "TK.txt"))
    });
}

criterion_group!(benches, bench_decode_line, bench_parse_year);
criterion_main!(benches);
