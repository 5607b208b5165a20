use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{Alias, Expr, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;

use super::{RepositoryError, UserRepository};
use crate::{
    model::{NewUser, User, Users},
    types::Uuid,
};

fn select_users() -> SelectStatement {
    Query::select()
        .columns([Users::Id, Users::Username])
        .from(Users::Table)
        .to_owned()
}

fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<User, rusqlite::Error> {
    let (sql, values) = select_users()
        .and_where(Expr::col(Users::Id).eq(id))
        .limit(1)
        .build_rusqlite(SqliteQueryBuilder);

    let mut stmt = conn.prepare_cached(&sql)?;
    stmt.query_row(&*values.as_params(), User::from_row)
}

impl UserRepository for Connection {
    fn create_user(&mut self, new_user: NewUser) -> Result<User, RepositoryError> {
        let new_user = new_user.into_user();

        let tx = self.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            fetch_by_id(&tx, &new_user.id)?
        };
        tx.commit()?;

        Ok(user)
    }

    fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let (sql, values) = select_users()
            .order_by(Alias::new("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = self.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        if users.is_empty() {
            Err(RepositoryError::EmptyResult)
        } else {
            Ok(users)
        }
    }

    fn find_user_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        let id = Uuid::parse(id)
            .map_err(|e| RepositoryError::InvalidArgument(format!("user id {id:?}: {e}")))?;

        Ok(fetch_by_id(self, &id).optional()?)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        migrations::test_connection,
        model::NewUser,
        repository::{RepositoryError, UserRepository},
        types::Uuid,
    };

    #[test]
    fn test_create_then_find() {
        let mut conn = test_connection();
        let user = conn.create_user(NewUser::new("fcc_test")).unwrap();

        let found = conn.find_user_by_id(&user.id.to_string()).unwrap();
        assert_eq!(found, Some(user.clone()));
        assert_eq!(found.unwrap().username.as_deref(), Some("fcc_test"));
    }

    #[test]
    fn test_null_and_empty_usernames_are_stored() {
        let mut conn = test_connection();
        let nameless = conn.create_user(NewUser::default()).unwrap();
        let empty = conn.create_user(NewUser::new("")).unwrap();

        assert_eq!(conn.fetch_user(&nameless.id.to_string()).unwrap().username, None);
        assert_eq!(
            conn.fetch_user(&empty.id.to_string()).unwrap().username.as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_list_users_in_insertion_order() {
        let mut conn = test_connection();
        let names = ["zed", "amy", "mo"];
        for name in names {
            conn.create_user(NewUser::new(name)).unwrap();
        }

        let listed: Vec<_> = conn
            .list_users()
            .unwrap()
            .into_iter()
            .map(|u| u.username.unwrap())
            .collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_list_users_empty_is_error() {
        let conn = test_connection();
        assert!(matches!(conn.list_users(), Err(RepositoryError::EmptyResult)));
    }

    #[test]
    fn test_find_missing_user() {
        let conn = test_connection();
        assert_eq!(conn.find_user_by_id(&Uuid::new_v4().to_string()).unwrap(), None);

        let err = conn.fetch_user(&Uuid::new_v4().to_string()).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn test_malformed_id_is_invalid_argument() {
        let conn = test_connection();
        let err = conn.find_user_by_id("not-an-id").unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidArgument(_)));
        assert!(err.is_not_found());
    }
}
