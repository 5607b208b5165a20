use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deadpool_sqlite::HookError;
use shared::repository::RepositoryError;
use tracing::{debug, error};

pub const USER_NOT_FOUND: &str = "User not found";
pub const NO_USERS_FOUND: &str = "No users found";

pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    /// Return a plain text response error message
    pub fn new<S: Into<String>>(code: StatusCode, message: S) -> Self {
        AppError { code, message: message.into() }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppError {}: {}", self.code, self.message)
    }
}

// Render AppError into a response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.code, self.message).into_response()
    }
}

// Anything without a route specific message becomes a bare 500. The cause is
// only logged
impl<E> From<E> for AppError
where
    E: Into<Box<dyn std::error::Error>>,
{
    #[track_caller]
    fn from(err: E) -> Self {
        let err = err.into();
        error!(error = ?err, "Unhandled error");
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

impl From<AppError> for HookError {
    fn from(err: AppError) -> Self {
        Self::Message(err.to_string())
    }
}

pub trait ResultContext<T> {
    /// Turns a repository failure into the route's response. Missing records
    /// become a 404, anything else a 500 carrying `message`
    fn context<S: Into<String>>(self, message: S) -> Result<T, AppError>;
}

impl<T> ResultContext<T> for Result<T, RepositoryError> {
    fn context<S: Into<String>>(self, message: S) -> Result<T, AppError> {
        self.map_err(|err| match err {
            RepositoryError::EmptyResult => AppError::new(StatusCode::NOT_FOUND, NO_USERS_FOUND),
            err if err.is_not_found() => {
                debug!(%err, "Lookup failed");
                AppError::new(StatusCode::NOT_FOUND, USER_NOT_FOUND)
            }
            err => {
                let message = message.into();
                error!(error = %err, "{message}");
                AppError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        })
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use shared::repository::RepositoryError;

    use super::{ResultContext, NO_USERS_FOUND, USER_NOT_FOUND};

    fn context(err: RepositoryError) -> (StatusCode, String) {
        let err = Err::<(), _>(err).context("Error retrieving logs").unwrap_err();
        (err.code, err.message)
    }

    #[test]
    fn test_not_found_variants_are_404() {
        assert_eq!(
            context(RepositoryError::NotFound),
            (StatusCode::NOT_FOUND, USER_NOT_FOUND.to_owned())
        );
        assert_eq!(
            context(RepositoryError::InvalidArgument("bad id".to_owned())),
            (StatusCode::NOT_FOUND, USER_NOT_FOUND.to_owned())
        );
        assert_eq!(
            context(RepositoryError::EmptyResult),
            (StatusCode::NOT_FOUND, NO_USERS_FOUND.to_owned())
        );
    }

    #[test]
    fn test_storage_errors_hide_the_cause() {
        let (code, message) = context(RepositoryError::Storage(rusqlite::Error::InvalidQuery));
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Error retrieving logs");
    }
}
