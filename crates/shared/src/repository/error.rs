use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("No matching record")]
    NotFound,
    #[error("Collection is empty")]
    EmptyResult,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Rusqlite error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("Deadpool interact error: {0}")]
    Interact(#[from] deadpool_sqlite::InteractError),
    #[error("Deadpool pool error: {0}")]
    Pool(#[from] deadpool_sqlite::PoolError),
}

impl RepositoryError {
    /// Whether the failure means the requested record doesn't exist, as
    /// opposed to the store misbehaving. Malformed ids count as missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::NotFound | RepositoryError::InvalidArgument(_)
        )
    }
}
