//! Date parsing helpers for the three snippet layouts.

use chrono::NaiveDate;

/// Formats accepted for the free-form date after a `Date:` label.
/// Tried in order, first success wins.
const LABELED_FORMATS: &[&str] = &[
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%Y-%m-%d",
    "%d/%m/%Y",
];

/// Parse a human-readable date like "11 Dec 2025".
///
/// Returns `None` for anything outside the supported formats or for a
/// string naming an impossible calendar date.
pub fn parse_labeled_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    LABELED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Parse a day-first slash date like "12/11/2025" (12 Nov 2025).
///
/// The components arrive day/month/year; this must not be confused
/// with month-first parsing.
pub fn parse_slash_date_dmy(raw: &str) -> Option<NaiveDate> {
    let mut it = raw.trim().split('/');
    let day: u32 = it.next()?.parse().ok()?;
    let month: u32 = it.next()?.parse().ok()?;
    let year: i32 = it.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a strict ISO date (YYYY-MM-DD).
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
