//! Tests for the curated region table

use std::collections::HashSet;

use crate::app::services::station_catalog::regions::{REGION_TABLE, resolve_region};
use crate::constants::{REGION_DISPLAY_ORDER, UNCLASSIFIED_REGION, region_display_rank};

#[test]
fn test_curated_codes_resolve() {
    assert_eq!(resolve_region("TK"), "東京");
    assert_eq!(resolve_region("OS"), "大阪");
    assert_eq!(resolve_region("WN"), "北海道");
    assert_eq!(resolve_region("NG"), "愛知");
    assert_eq!(resolve_region("LF"), "沖縄");
    assert_eq!(resolve_region("RQ"), "山口");
}

#[test]
fn test_unknown_codes_fall_back_to_unclassified() {
    assert_eq!(resolve_region("ZZ"), UNCLASSIFIED_REGION);
    assert_eq!(resolve_region(""), UNCLASSIFIED_REGION);
    // Exact match only: no case folding, no prefix matching
    assert_eq!(resolve_region("tk"), UNCLASSIFIED_REGION);
    assert_eq!(resolve_region("TKX"), UNCLASSIFIED_REGION);
    assert_eq!(resolve_region(" TK"), UNCLASSIFIED_REGION);
}

#[test]
fn test_table_has_no_duplicate_codes() {
    let mut seen = HashSet::new();
    for (code, _) in REGION_TABLE {
        assert!(seen.insert(code), "duplicate table entry for {}", code);
    }
    assert_eq!(seen.len(), 207);
}

#[test]
fn test_every_table_region_has_a_display_rank() {
    for (code, region) in REGION_TABLE {
        assert!(
            region_display_rank(region) < REGION_DISPLAY_ORDER.len(),
            "{} maps to {} which is missing from the display order",
            code,
            region
        );
    }
}

#[test]
fn test_table_codes_are_well_formed() {
    for (code, _) in REGION_TABLE {
        assert_eq!(code.len(), 2, "bad code length: {}", code);
        assert!(
            code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "bad code characters: {}",
            code
        );
    }
}
