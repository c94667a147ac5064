//! Curated station-code to prefecture table
//!
//! The JMA listing page encodes prefectures as rowspan cells, which makes
//! them awkward to scrape reliably. This table assigns each known station
//! code its prefecture directly; codes outside the table fall into the
//! unclassified bucket instead of failing.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::constants::UNCLASSIFIED_REGION;

/// Station code to prefecture assignments, grouped by prefecture
#[rustfmt::skip]
pub(crate) static REGION_TABLE: &[(&str, &str)] = &[
    // 北海道
    ("WN", "北海道"), ("KE", "北海道"), ("A0", "北海道"), ("AS", "北海道"),
    ("A6", "北海道"), ("NM", "北海道"), ("HN", "北海道"), ("KP", "北海道"),
    ("KR", "北海道"), ("B1", "北海道"), ("A9", "北海道"), ("C8", "北海道"),
    ("TM", "北海道"), ("SO", "北海道"), ("A8", "北海道"), ("A3", "北海道"),
    ("HK", "北海道"), ("Q0", "北海道"), ("A5", "北海道"), ("ES", "北海道"),
    ("ZP", "北海道"), ("OR", "北海道"), ("SE", "北海道"), ("B6", "北海道"),
    ("B5", "北海道"), ("Z8", "北海道"), ("B3", "北海道"), ("OW", "北海道"),
    ("B4", "北海道"), ("B2", "北海道"),
    // 青森
    ("HA", "青森"), ("H1", "青森"), ("H0", "青森"), ("H9", "青森"),
    ("HC", "青森"), ("H2", "青森"), ("H3", "青森"), ("H5", "青森"),
    ("AW", "青森"), ("H4", "青森"),
    // 岩手
    ("D0", "岩手"), ("D1", "岩手"), ("D2", "岩手"), ("D3", "岩手"),
    ("D4", "岩手"), ("D5", "岩手"), ("D6", "岩手"),
    // 宮城
    ("E0", "宮城"), ("E1", "宮城"), ("E2", "宮城"), ("E3", "宮城"),
    ("E4", "宮城"),
    // 福島
    ("F0", "福島"), ("F1", "福島"),
    // 茨城
    ("I0", "茨城"), ("I1", "茨城"),
    // 千葉
    ("C0", "千葉"), ("C1", "千葉"), ("C2", "千葉"), ("C3", "千葉"),
    ("C4", "千葉"), ("C5", "千葉"),
    // 東京
    ("TK", "東京"), ("T0", "東京"), ("T1", "東京"), ("T2", "東京"),
    // 神奈川
    ("Y0", "神奈川"), ("Y1", "神奈川"), ("OD", "神奈川"),
    // 静岡
    ("S0", "静岡"), ("S1", "静岡"), ("S2", "静岡"), ("S3", "静岡"),
    ("S4", "静岡"), ("S5", "静岡"), ("S6", "静岡"), ("S7", "静岡"),
    // 愛知
    ("NG", "愛知"), ("N0", "愛知"),
    // 三重
    ("N1", "三重"), ("N2", "三重"), ("N3", "三重"), ("N4", "三重"),
    ("N5", "三重"),
    // 和歌山
    ("W0", "和歌山"), ("W1", "和歌山"), ("W2", "和歌山"), ("W3", "和歌山"),
    // 大阪
    ("OS", "大阪"),
    // 兵庫
    ("K0", "兵庫"), ("K1", "兵庫"), ("K2", "兵庫"), ("K3", "兵庫"),
    ("K4", "兵庫"), ("K5", "兵庫"), ("K6", "兵庫"), ("K7", "兵庫"),
    ("K8", "兵庫"), ("K9", "兵庫"),
    // 徳島
    ("U0", "徳島"), ("U1", "徳島"), ("U2", "徳島"),
    // 香川
    ("U3", "香川"), ("U4", "香川"),
    // 愛媛
    ("U5", "愛媛"), ("U6", "愛媛"), ("U7", "愛媛"), ("U8", "愛媛"),
    ("U9", "愛媛"),
    // 高知
    ("V0", "高知"), ("V1", "高知"), ("V2", "高知"), ("V3", "高知"),
    ("V4", "高知"), ("V5", "高知"),
    // 岡山
    ("M0", "岡山"),
    // 広島
    ("M1", "広島"), ("M2", "広島"), ("M3", "広島"),
    // 山口
    ("J0", "山口"), ("J1", "山口"), ("J2", "山口"), ("J3", "山口"),
    ("J4", "山口"), ("J5", "山口"), ("J6", "山口"), ("J7", "山口"),
    // 福岡
    ("G0", "福岡"), ("G1", "福岡"), ("G2", "福岡"), ("G3", "福岡"),
    ("G4", "福岡"),
    // 佐賀
    ("G5", "佐賀"), ("G6", "佐賀"),
    // 長崎
    ("G7", "長崎"), ("G8", "長崎"), ("G9", "長崎"), ("GA", "長崎"),
    ("GB", "長崎"), ("GC", "長崎"), ("GD", "長崎"), ("L0", "長崎"),
    ("L1", "長崎"),
    // 熊本
    ("L3", "熊本"), ("L4", "熊本"), ("L5", "熊本"), ("L6", "熊本"),
    // 鹿児島
    ("L7", "鹿児島"), ("L8", "鹿児島"), ("L9", "鹿児島"), ("LA", "鹿児島"),
    ("LB", "鹿児島"), ("LC", "鹿児島"), ("LD", "鹿児島"), ("LE", "鹿児島"),
    // 沖縄
    ("LF", "沖縄"), ("LG", "沖縄"), ("LH", "沖縄"), ("LI", "沖縄"),
    ("LJ", "沖縄"), ("LK", "沖縄"), ("LL", "沖縄"), ("LM", "沖縄"),
    ("LN", "沖縄"), ("LO", "沖縄"), ("LP", "沖縄"),
    // 大分
    ("P0", "大分"), ("P1", "大分"), ("P2", "大分"),
    // 宮崎
    ("P3", "宮崎"), ("P4", "宮崎"), ("P5", "宮崎"),
    // 福岡 (響灘側)
    ("P6", "福岡"), ("P7", "福岡"),
    // 山口 (響灘側)
    ("P8", "山口"),
    // 日本海側: 青森から山口まで
    ("Q1", "青森"),
    ("Q2", "秋田"), ("Q3", "秋田"),
    ("Q4", "山形"), ("Q5", "山形"),
    ("R0", "新潟"), ("R1", "新潟"), ("R2", "新潟"), ("R3", "新潟"),
    ("R4", "新潟"), ("R5", "新潟"),
    ("R6", "富山"), ("R7", "富山"),
    ("R8", "石川"), ("R9", "石川"), ("RA", "石川"), ("RB", "石川"),
    ("RC", "福井"), ("RD", "福井"), ("RE", "福井"),
    ("RF", "京都"), ("RG", "京都"),
    ("RH", "兵庫"), ("RI", "兵庫"),
    ("RJ", "鳥取"), ("RK", "鳥取"),
    ("RL", "島根"), ("RM", "島根"), ("RN", "島根"), ("RO", "島根"),
    ("RP", "山口"), ("RQ", "山口"),
];

static REGION_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn region_index() -> &'static HashMap<&'static str, &'static str> {
    REGION_INDEX.get_or_init(|| REGION_TABLE.iter().copied().collect())
}

/// Resolve the prefecture for a station code
///
/// The lookup is exact: no prefix matching, no normalization. Codes
/// outside the curated table resolve to the unclassified bucket, so
/// every code gets an answer.
pub fn resolve_region(code: &str) -> &'static str {
    region_index().get(code).copied().unwrap_or(UNCLASSIFIED_REGION)
}
