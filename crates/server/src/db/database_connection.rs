use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use deadpool_sqlite::Pool;
use rusqlite::Connection;
use shared::repository::RepositoryError;

/// Handle on the connection pool. A connection is only checked out when the
/// handler runs a query, so checkout failures surface as repository errors
#[derive(Debug, Clone)]
pub struct DatabaseConnection(pub Pool);

impl DatabaseConnection {
    /// Runs `f` against a pooled connection on the blocking worker
    pub async fn run<F, T>(&self, f: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut Connection) -> Result<T, RepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.0.get().await?;
        conn.interact(f).await?
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DatabaseConnection
where
    S: Send + Sync,
    Pool: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(DatabaseConnection(Pool::from_ref(state)))
    }
}
