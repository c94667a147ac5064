//! Tests for decode statistics

use crate::app::services::tide_text_parser::{ParseResult, ParseStats};

#[test]
fn test_success_rate_calculation() {
    let stats = ParseStats {
        total_lines: 20,
        records_decoded: 19,
        lines_skipped: 1,
        blank_lines: 2,
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());
}

#[test]
fn test_empty_stats() {
    let stats = ParseStats::new();

    assert_eq!(stats.success_rate(), 0.0);
    assert!(!stats.is_successful());
}

#[test]
fn test_perfect_decode() {
    let stats = ParseStats {
        total_lines: 10,
        records_decoded: 10,
        lines_skipped: 0,
        blank_lines: 0,
    };

    assert_eq!(stats.success_rate(), 100.0);
    assert!(stats.is_successful());
}

#[test]
fn test_ninety_percent_is_not_enough() {
    let stats = ParseStats {
        total_lines: 10,
        records_decoded: 9,
        lines_skipped: 1,
        blank_lines: 0,
    };

    assert_eq!(stats.success_rate(), 90.0);
    assert!(!stats.is_successful());
}

#[test]
fn test_parse_stats_summary() {
    let stats = ParseStats {
        total_lines: 368,
        records_decoded: 365,
        lines_skipped: 3,
        blank_lines: 2,
    };

    let summary = stats.summary();

    // Check that summary contains key information
    assert!(summary.contains("Decoded 365/368 lines"));
    assert!(summary.contains("99.2% success"));
    assert!(summary.contains("Skipped: 3"));
    assert!(summary.contains("Blank: 2"));
}

#[test]
fn test_parse_result_summary_delegates_to_stats() {
    let stats = ParseStats {
        total_lines: 5,
        records_decoded: 4,
        lines_skipped: 1,
        blank_lines: 0,
    };

    let result = ParseResult {
        records: Vec::new(),
        stats: stats.clone(),
    };

    // Should delegate to stats.summary()
    assert_eq!(result.summary(), stats.summary());
}
