// Dates: DD/MM/YYYY on screen, YYYY-MM-DD in the store.
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

// chrono alone would accept one-digit days and short years; the shape is checked first.
static DISPLAY_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("display date regex is valid"));
static CANONICAL_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("canonical date regex is valid"));

fn parse_with(s: &str, shape: &Regex, format: &str) -> Option<NaiveDate> {
    if !shape.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, format)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Strict `DD/MM/YYYY`. Out-of-range days or months (31/02, 00/13) are rejected, not clamped.
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    parse_with(s, &DISPLAY_DATE_SHAPE, DISPLAY_DATE_FORMAT)
}

/// Strict `YYYY-MM-DD`.
pub fn parse_canonical_date(s: &str) -> Option<NaiveDate> {
    parse_with(s, &CANONICAL_DATE_SHAPE, CANONICAL_DATE_FORMAT)
}

pub fn validate_date(s: &str) -> bool {
    parse_display_date(s).is_some()
}

/// `DD/MM/YYYY` -> `YYYY-MM-DD`; `None` means the date is invalid, never a default date.
pub fn format_sql_date(s: &str) -> Option<String> {
    parse_display_date(s).map(|date| date.format(CANONICAL_DATE_FORMAT).to_string())
}

/// `YYYY-MM-DD` -> `DD/MM/YYYY`, the read-side counterpart of [`format_sql_date`].
pub fn format_display_date(s: &str) -> Option<String> {
    parse_canonical_date(s).map(display_date)
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Key for sorting a date column that may hold either form.
/// Anything unparseable (including `"-"` placeholders) sorts first.
pub fn date_sort_key(s: &str) -> NaiveDate {
    let s = s.trim();
    parse_display_date(s)
        .or_else(|| parse_canonical_date(s))
        .unwrap_or(NaiveDate::MIN)
}
