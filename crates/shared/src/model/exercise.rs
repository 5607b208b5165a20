use chrono::{DateTime, Utc};
use exemplar::Model;
use sea_query::Iden;

use crate::types::{InputValue, Timestamp, Uuid};

/// Cap on log entries when the query doesn't supply a usable limit
pub const DEFAULT_LOG_LIMIT: u64 = 500;

#[derive(Debug, Clone, PartialEq, Model)]
#[table("exercises")]
pub struct ExerciseEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: Option<String>,
    /// Minutes. `None` when the submitted value wasn't a number
    pub duration: Option<i64>,
    pub date: Timestamp,
}

#[derive(Iden)]
pub enum Exercises {
    Table,
    Id,
    UserId,
    Description,
    Duration,
    Date,
}

/// Raw fields of an exercise submission for a user that is known to exist
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: Option<InputValue>,
    pub duration: Option<InputValue>,
    pub date: Option<InputValue>,
}

impl NewExercise {
    /// Coerces every field. A missing or unparseable date becomes `now`
    pub fn into_entry(self, now: DateTime<Utc>) -> ExerciseEntry {
        ExerciseEntry {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            description: self.description.map(InputValue::into_text),
            duration: self.duration.as_ref().and_then(InputValue::parse_int),
            date: self
                .date
                .as_ref()
                .and_then(InputValue::parse_date)
                .unwrap_or(now)
                .into(),
        }
    }
}

/// Selects a user's log entries. Both date bounds are inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct LogFilter {
    pub user_id: Uuid,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: u64,
}

impl LogFilter {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: DEFAULT_LOG_LIMIT,
        }
    }

    /// Builds the filter from raw query parameters. Bounds that are empty or
    /// don't parse as dates are left off
    pub fn from_params(
        user_id: Uuid,
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        let bound = |v: Option<&str>| v.and_then(|v| InputValue::from(v).parse_date());

        Self {
            user_id,
            from: bound(from),
            to: bound(to),
            limit: parse_limit(limit),
        }
    }
}

/// Zero, missing and non-numeric limits fall back to [`DEFAULT_LOG_LIMIT`].
/// A negative limit caps at its magnitude
pub fn parse_limit(limit: Option<&str>) -> u64 {
    match limit.and_then(|v| InputValue::from(v).parse_int()) {
        None | Some(0) => DEFAULT_LOG_LIMIT,
        Some(n) => n.unsigned_abs(),
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn new_exercise(duration: Option<InputValue>, date: Option<InputValue>) -> NewExercise {
        NewExercise {
            user_id: Uuid::new_v4(),
            description: Some(InputValue::from("test run")),
            duration,
            date,
        }
    }

    #[test]
    fn test_into_entry_parses_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let entry = new_exercise(Some("30".into()), Some("2023-01-15".into())).into_entry(now);

        assert_eq!(entry.description.as_deref(), Some("test run"));
        assert_eq!(entry.duration, Some(30));
        assert_eq!(*entry.date, Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_into_entry_defaults_date_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(*new_exercise(None, None).into_entry(now).date, now);
        assert_eq!(
            *new_exercise(None, Some("not a date".into())).into_entry(now).date,
            now
        );
        assert_eq!(*new_exercise(None, Some("".into())).into_entry(now).date, now);
    }

    #[test]
    fn test_into_entry_invalid_duration_is_none() {
        let now = Utc::now();
        let entry = new_exercise(Some("thirty".into()), None).into_entry(now);
        assert_eq!(entry.duration, None);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), DEFAULT_LOG_LIMIT);
        assert_eq!(parse_limit(Some("")), DEFAULT_LOG_LIMIT);
        assert_eq!(parse_limit(Some("abc")), DEFAULT_LOG_LIMIT);
        assert_eq!(parse_limit(Some("0")), DEFAULT_LOG_LIMIT);
        assert_eq!(parse_limit(Some("3")), 3);
        assert_eq!(parse_limit(Some("7days")), 7);
        assert_eq!(parse_limit(Some("-2")), 2);
    }

    #[test]
    fn test_from_params_skips_bad_bounds() {
        let user_id = Uuid::new_v4();
        let filter = LogFilter::from_params(user_id, Some(""), Some("garbage"), None);
        assert_eq!(filter, LogFilter::new(user_id));

        let filter = LogFilter::from_params(user_id, Some("2023-01-01"), None, Some("10"));
        assert_eq!(filter.from, Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(filter.to, None);
        assert_eq!(filter.limit, 10);
    }
}
