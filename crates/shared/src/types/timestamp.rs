use std::{fmt, ops::Deref};

use chrono::{DateTime, Utc};
use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

/// Point in time stored as integer milliseconds since the unix epoch so range
/// comparisons in sqlite are numeric for any representable year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(self.0.timestamp_millis().into()))
    }
}

impl FromSql for Timestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let millis = value.as_i64()?;
        DateTime::from_timestamp_millis(millis)
            .map(Timestamp)
            .ok_or(FromSqlError::OutOfRange(millis))
    }
}

impl From<Timestamp> for sea_query::Value {
    fn from(value: Timestamp) -> Self {
        value.0.timestamp_millis().into()
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use rusqlite::Connection;

    use super::Timestamp;

    #[test]
    fn test_stored_as_epoch_millis() {
        let conn = Connection::open_in_memory().unwrap();
        let date = Timestamp(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap());

        let (millis, read): (i64, Timestamp) = conn
            .query_row("SELECT ?1, ?1", [date], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap();
        assert_eq!(millis, 1000);
        assert_eq!(read, date);
    }

    #[test]
    fn test_orders_across_year_range() {
        let early = Timestamp(Utc.with_ymd_and_hms(-100, 1, 1, 0, 0, 0).unwrap());
        let late = Timestamp(Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap());
        assert!(early < late);
        assert!(early.timestamp_millis() < late.timestamp_millis());
    }
}
