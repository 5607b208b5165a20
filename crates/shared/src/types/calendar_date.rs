use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::Timestamp;

/// Renders only the calendar part of a timestamp, as `Sun Jan 15 2023`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate(pub DateTime<Utc>);

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%a %b %d %Y"))
    }
}

impl From<DateTime<Utc>> for CalendarDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for CalendarDate {
    fn from(value: Timestamp) -> Self {
        Self(value.0)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
