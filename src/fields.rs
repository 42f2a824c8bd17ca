//! Field-level validators for form input (email, phone, URL, date).
//!
//! Pure predicates with no side effects; the dashboard's form handlers call
//! these directly, independently of the dataset-level engine.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DEFAULT_DATE_FORMATS;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex: email")
});

// US ten-digit (area and exchange codes start 2-9, optional +1 prefix) and
// generic international (+, leading non-zero, 2-15 digits total).
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\+?1?[2-9]\d{2}[2-9]\d{2}\d{4}$").expect("Invalid regex: US phone"),
        Regex::new(r"^\+?[1-9]\d{1,14}$").expect("Invalid regex: international phone"),
    ]
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:[-\w.])+(?::\d+)?(?:/(?:[\w/_.-])*(?:\?(?:[\w&=%.-])*)?(?:#(?:\w*))?)?$")
        .expect("Invalid regex: URL")
});

/// Validate an email address shape: `local@domain.tld` with a dotted domain
/// and a TLD of at least two letters.
pub fn validate_email(email: &str) -> bool {
    let trimmed = email.trim();
    !trimmed.is_empty() && EMAIL_RE.is_match(trimmed)
}

/// Validate a phone number after stripping common separators
/// (whitespace, dashes, parentheses, dots).
pub fn validate_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.'))
        .collect();
    !cleaned.is_empty() && PHONE_PATTERNS.iter().any(|p| p.is_match(&cleaned))
}

/// Validate a URL of the shape `http(s)://host[:port][/path][?query][#fragment]`.
pub fn validate_url(url: &str) -> bool {
    let trimmed = url.trim();
    !trimmed.is_empty() && URL_RE.is_match(trimmed)
}

/// Validate a date string against [`DEFAULT_DATE_FORMATS`].
pub fn validate_date(date: &str) -> bool {
    validate_date_with(date, DEFAULT_DATE_FORMATS.iter().copied())
}

/// Validate a date string against an ordered list of chrono formats;
/// success on first match.
pub fn validate_date_with<'a, I>(date: &str, formats: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return false;
    }

    for format in formats {
        let parsed = if format.contains("%H") {
            NaiveDateTime::parse_from_str(trimmed, format).is_ok()
        } else {
            NaiveDate::parse_from_str(trimmed, format).is_ok()
        };
        if parsed {
            return true;
        }
    }

    false
}
