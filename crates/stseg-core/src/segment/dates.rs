//! Boundary date token parsing.

use chrono::NaiveDate;

use super::patterns::DATE_TOKEN;

/// Parse the first date-like token in a line as a day/month/year date.
///
/// Returns `None` when the line carries no date token or the token is not a
/// valid calendar date (e.g. `31/13/2023`). Segmentation never depends on the
/// result; the token itself is the boundary signal.
pub fn parse_boundary_date(line: &str) -> Option<NaiveDate> {
    let caps = DATE_TOKEN.captures(line)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = parse_year(&caps[3]);

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}
