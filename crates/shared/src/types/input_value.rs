//! Loosely typed request fields.
//!
//! Form bodies only ever carry strings while JSON bodies can carry numbers and
//! booleans for the same field. Nothing is rejected here: every parse returns
//! either a typed value or `None`, and callers decide what `None` means
//! (a null duration, the current time, the default limit).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Bool(v) => v.fmt(f),
            InputValue::Integer(v) => v.fmt(f),
            InputValue::Float(v) => v.fmt(f),
            InputValue::Text(v) => v.fmt(f),
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_owned())
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        InputValue::Integer(value)
    }
}

/// Naive formats tried after RFC 3339, all read as UTC
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%a %b %d %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%m/%d/%Y",
];

impl InputValue {
    /// The value as free text. Numbers and booleans are stringified
    pub fn into_text(self) -> String {
        match self {
            InputValue::Text(v) => v,
            other => other.to_string(),
        }
    }

    /// Integer prefix parse: leading whitespace and an optional sign are
    /// skipped, then as many digits as are present are read. `"30"`,
    /// `"30 minutes"` and `"30.9"` all give 30. A `0x` prefix switches to hex.
    ///
    /// `None` when no digits are found, the value overflows or is a boolean
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            InputValue::Integer(v) => Some(*v),
            InputValue::Float(v) if v.is_finite() && v.abs() < i64::MAX as f64 => {
                Some(v.trunc() as i64)
            }
            InputValue::Float(_) => None,
            InputValue::Text(v) => parse_int_prefix(v),
            InputValue::Bool(_) => None,
        }
    }

    /// Numbers are milliseconds since the unix epoch. Text is tried as
    /// RFC 3339, then naive date-times and dates (read as UTC), then RFC 2822
    pub fn parse_date(&self) -> Option<DateTime<Utc>> {
        match self {
            InputValue::Integer(v) => DateTime::from_timestamp_millis(*v),
            InputValue::Float(v) if v.is_finite() => DateTime::from_timestamp_millis(v.trunc() as i64),
            InputValue::Text(v) => parse_date_text(v.trim()),
            _ => None,
        }
    }
}

fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, text) = match text.get(..2) {
        Some("0x") | Some("0X") => (16, &text[2..]),
        _ => (10, text),
    };

    let digits_len = text
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(text.len());
    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&text[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(text, format) {
            return Some(date.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|d| d.and_utc());
        }
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
