use chrono::Utc;
use exemplar::Model;
use rusqlite::Connection;
use sea_query::{Alias, Expr, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use tracing::trace;

use super::{ExerciseRepository, RepositoryError};
use crate::{
    model::{ExerciseEntry, Exercises, LogFilter, NewExercise},
    types::{Timestamp, Uuid},
};

fn select_exercises() -> SelectStatement {
    Query::select()
        .columns([
            Exercises::Id,
            Exercises::UserId,
            Exercises::Description,
            Exercises::Duration,
            Exercises::Date,
        ])
        .from(Exercises::Table)
        .to_owned()
}

fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<ExerciseEntry, rusqlite::Error> {
    let (sql, values) = select_exercises()
        .and_where(Expr::col(Exercises::Id).eq(id))
        .limit(1)
        .build_rusqlite(SqliteQueryBuilder);

    let mut stmt = conn.prepare_cached(&sql)?;
    stmt.query_row(&*values.as_params(), ExerciseEntry::from_row)
}

impl ExerciseRepository for Connection {
    fn add_exercise(&mut self, new_exercise: NewExercise) -> Result<ExerciseEntry, RepositoryError> {
        let entry = new_exercise.into_entry(Utc::now());

        let tx = self.transaction()?;
        let entry = {
            entry.insert(&tx)?;
            fetch_by_id(&tx, &entry.id)?
        };
        tx.commit()?;

        Ok(entry)
    }

    fn query_exercises(&self, filter: &LogFilter) -> Result<Vec<ExerciseEntry>, RepositoryError> {
        let mut query = select_exercises();
        query
            .and_where(Expr::col(Exercises::UserId).eq(&filter.user_id))
            .order_by(Alias::new("rowid"), Order::Asc)
            .limit(filter.limit);

        if let Some(from) = filter.from {
            query.and_where(Expr::col(Exercises::Date).gte(Timestamp(from)));
        }
        if let Some(to) = filter.to {
            query.and_where(Expr::col(Exercises::Date).lte(Timestamp(to)));
        }

        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);
        trace!(?filter, %sql, "query_exercises");

        let mut stmt = self.prepare_cached(&sql)?;
        let entries = stmt
            .query_map(&*values.as_params(), ExerciseEntry::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}
