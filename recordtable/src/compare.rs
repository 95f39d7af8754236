//! Cell comparators.
//!
//! Pure functions comparing two cells under a declared [`SortType`]. All of
//! them work on the flattened [`visible_text`](Cell::visible_text) of the
//! cells, since rendered content is all the table knows about a value.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::cell::Cell;
use crate::column::SortType;

/// Date/time renderings accepted by [`parse_display_date`], tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%b %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M %p",
    "%b %d, %Y %H:%M",
    "%d %b %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%b %d, %Y", "%B %d, %Y", "%d %b %Y"];

/// Compare two cells according to a column's sort type.
pub fn compare_cells(a: &Cell, b: &Cell, sort_type: SortType) -> Ordering {
    let a = a.visible_text();
    let b = b.visible_text();
    match sort_type {
        SortType::String => compare_text(&a, &b),
        SortType::Numeric => compare_numeric(&a, &b),
        SortType::Date => compare_dates(&a, &b),
    }
}

/// Case-insensitive text comparison.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Numeric comparison of two texts.
///
/// Texts that do not parse as a number (`NaN` included) sort before every
/// number; two such texts fall back to text comparison. This keeps the order
/// total for mixed columns.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => compare_text(a, b),
    }
}

/// Date comparison of two rendered date/time texts.
///
/// Texts that do not parse sort before every parseable date; two unparseable
/// texts fall back to text comparison. The order this gives for malformed
/// input is stable but carries no meaning.
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_display_date(a), parse_display_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => compare_text(a, b),
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Parse a rendered date/time such as `2024-03-04 15:30` or
/// `Mar 4, 2024 at 3:30 PM`.
///
/// The `at` separator some renderings put between date and time is
/// normalized to a space before parsing.
pub fn parse_display_date(s: &str) -> Option<NaiveDateTime> {
    let normalized = s.trim().replace(" at ", " ");
    let normalized = normalized.as_str();

    if let Ok(dt) = DateTime::parse_from_rfc3339(normalized) {
        return Some(dt.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(normalized, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(normalized, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}
