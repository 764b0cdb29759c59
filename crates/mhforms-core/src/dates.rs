//! Clinical date conventions.
//!
//! Records are written day-first (`12/03/2023`, `12 March 2023`) or in ISO
//! form (`2023-03-12`, optionally with a time such as `2023-03-12T10:15`).
//! Month-first dates are never recognised. Two-digit years pivot at 50: `49`
//! is 2049, `50` is 1950.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::{Captures, Regex};

use crate::error::CoreError;

const DATE_PATTERN: &str = r"(?:(?P<iso_y>\d{4})-(?P<iso_m>\d{1,2})-(?P<iso_d>\d{1,2})(?:T\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?)?|(?P<num_d>\d{1,2})[/.\-](?P<num_m>\d{1,2})[/.\-](?P<num_y>\d{4}|\d{2})|(?P<txt_d>\d{1,2})(?:st|nd|rd|th)?\s+(?P<txt_m>jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sept?(?:ember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?,?\s+(?P<txt_y>\d{4}))";

static LEADING_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^[ \t]*{DATE_PATTERN}\b")).expect("leading date pattern")
});

static ANY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b{DATE_PATTERN}\b")).expect("date pattern"));

/// Parse a date at the very start of `text`.
///
/// Returns the date and the byte offset just past the marker, so callers can
/// strip it from the note body.
pub fn parse_leading_date(text: &str) -> Option<(Date, usize)> {
    let caps = LEADING_DATE.captures(text)?;
    let end = caps.get(0)?.end();
    Some((date_from_captures(&caps)?, end))
}

/// Find the first valid date anywhere in `text`.
pub fn find_date(text: &str) -> Option<Date> {
    ANY_DATE
        .captures_iter(text)
        .find_map(|caps| date_from_captures(&caps))
}

/// Parse a string that is nothing but a date.
pub fn parse_date(text: &str) -> Result<Date, CoreError> {
    let trimmed = text.trim();
    match parse_leading_date(trimmed) {
        Some((date, end)) if trimmed[end..].trim().is_empty() => Ok(date),
        _ => Err(CoreError::InvalidDate(trimmed.to_string())),
    }
}

/// Format as `dd/mm/yyyy`.
pub fn format_date(date: Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

/// Map an English month name or three-letter abbreviation to 1–12.
pub fn month_from_name(name: &str) -> Option<i8> {
    let lower = name.trim().trim_end_matches('.').to_lowercase();
    let month = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn expand_year(raw: &str) -> Option<i16> {
    let year: i16 = raw.parse().ok()?;
    if raw.len() == 2 {
        Some(if year < 50 { 2000 + year } else { 1900 + year })
    } else {
        Some(year)
    }
}

fn date_from_captures(caps: &Captures<'_>) -> Option<Date> {
    let (year, month, day) = if let Some(y) = caps.name("iso_y") {
        (
            expand_year(y.as_str())?,
            caps.name("iso_m")?.as_str().parse().ok()?,
            caps.name("iso_d")?.as_str().parse().ok()?,
        )
    } else if let Some(y) = caps.name("num_y") {
        (
            expand_year(y.as_str())?,
            caps.name("num_m")?.as_str().parse().ok()?,
            caps.name("num_d")?.as_str().parse().ok()?,
        )
    } else {
        (
            expand_year(caps.name("txt_y")?.as_str())?,
            month_from_name(caps.name("txt_m")?.as_str())?,
            caps.name("txt_d")?.as_str().parse().ok()?,
        )
    };
    Date::new(year, month, day).ok()
}
