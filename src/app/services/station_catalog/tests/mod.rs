//! Shared fixtures for station catalog tests

use crate::app::models::StationInfo;

mod regions_tests;

/// Create a station for direct catalog construction
pub fn station(code: &str, name: &str, region: &str) -> StationInfo {
    StationInfo::new(code.to_string(), name.to_string(), region.to_string()).unwrap()
}

/// A cut-down listing page in the shape the JMA catalogue uses: rowspan
/// prefecture cells, one name link and one tide-table shortcut link per
/// station, plus the malformed anchors real pages accumulate
pub fn sample_listing_html() -> String {
    r#"<html><body>
<table border="1">
<tr><th>都道府県</th><th>地点</th><th>表</th></tr>
<tr><td rowspan="3">北海道</td>
    <td><a href="suisan.php?stn=WN&year=2026">稚内</a></td>
    <td><a href="suisan.php?stn=WN&year=2026&mode=tide">潮汐表</a></td></tr>
<tr><td><a href="suisan.php?stn=HN&year=2026">函館</a></td>
    <td><a href="suisan.php?stn=HN&year=2026&mode=tide">潮汐表</a></td></tr>
<tr><td><a href="suisan.php?stn=A0&year=2026"> 網走 </a></td>
    <td><a href="suisan.php?stn=A0&year=2026&mode=tide">潮汐表</a></td></tr>
<tr><td>東京</td>
    <td><a href="suisan.php?stn=TK&year=2026">東京</a></td>
    <td><a href="suisan.php?stn=TK&year=2026&mode=tide">潮汐表</a></td></tr>
<tr><td>大阪</td>
    <td><a href="suisan.php?stn=OS&year=2026">大阪</a></td>
    <td><a href="suisan.php?stn=OS&year=2026&mode=tide">潮汐表</a></td></tr>
<tr><td>その他</td>
    <td><a href="suisan.php?stn=ZZ&year=2026">架空</a></td>
    <td><a href="suisan.php?stn=C0&year=2026"></a></td>
    <td><a href="suisan.php?stn=ab&year=2026">小文字</a></td></tr>
</table>
</body></html>"#
        .to_string()
}
