//! Tests for whole-body parsing and file handling

use super::*;
use crate::Error;
use crate::app::services::tide_text_parser::TideTextParser;

#[test]
fn test_parse_text_counts_every_line_kind() {
    let parser = TideTextParser::new();
    let result = parser.parse_text(&create_test_body(), "TK.txt");

    assert_eq!(result.stats.total_lines, 5);
    assert_eq!(result.stats.records_decoded, 3);
    assert_eq!(result.stats.lines_skipped, 2);
    assert_eq!(result.stats.blank_lines, 1);
    assert_eq!(result.records.len(), 3);
}

#[test]
fn test_parse_text_preserves_input_order() {
    // Output order mirrors the file; sorting is the caller's concern
    let mut body = String::new();
    for day in [3, 1, 2] {
        body.push_str(&encode_line(&sample_record(day)));
        body.push('\n');
    }

    let parser = TideTextParser::new();
    let result = parser.parse_text(&body, "TK.txt");

    let days: Vec<u32> = result.records.iter().map(|r| r.date.day()).collect();
    assert_eq!(days, vec![3, 1, 2]);
}

#[test]
fn test_parse_empty_body() {
    let parser = TideTextParser::new();
    let result = parser.parse_text("", "empty.txt");

    assert!(result.records.is_empty());
    assert_eq!(result.stats.total_lines, 0);
    assert_eq!(result.stats.blank_lines, 0);
    assert_eq!(result.stats.success_rate(), 0.0);
}

#[test]
fn test_parse_file_reads_and_decodes() {
    let temp_file = create_temp_file(&create_test_body());

    let parser = TideTextParser::new();
    let result = parser.parse_file(temp_file.path()).unwrap();

    assert_eq!(result.records.len(), 3);
    assert_eq!(result.records[0].station, "TK");
    assert_eq!(result.stats.lines_skipped, 2);
}

#[test]
fn test_parse_file_missing_path() {
    let parser = TideTextParser::new();
    let result = parser.parse_file(std::path::Path::new("/nonexistent/XX.txt"));

    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[test]
fn test_realistic_month_is_successful() {
    // One banner line and a full month of data, as the yearly files have
    let mut body = String::from("JMA ANNUAL TIDE TABLE 2026 (TOKYO)\n");
    for day in 1..=31 {
        body.push_str(&encode_line(&sample_record(day)));
        body.push('\n');
    }

    let parser = TideTextParser::new();
    let result = parser.parse_text(&body, "TK.txt");

    assert_eq!(result.stats.records_decoded, 31);
    assert_eq!(result.stats.lines_skipped, 1);
    assert!(result.stats.is_successful());
}
