//! Typed data access over the `users` and `exercises` collections.
//!
//! Handlers only talk to these traits. The sqlite implementations live on
//! [`rusqlite::Connection`] so they can run inside a pooled connection's
//! `interact` closure.

use crate::model::{ExerciseEntry, LogFilter, NewExercise, NewUser, User};

mod error;
pub use error::*;

mod user;

mod exercise;

pub trait UserRepository {
    /// Stores a new user and returns it with its assigned id
    fn create_user(&mut self, new_user: NewUser) -> Result<User, RepositoryError>;

    /// All users in insertion order. [`RepositoryError::EmptyResult`] if there
    /// are none
    fn list_users(&self) -> Result<Vec<User>, RepositoryError>;

    /// Point lookup. An id that isn't well formed is
    /// [`RepositoryError::InvalidArgument`]
    fn find_user_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;

    /// Like [`UserRepository::find_user_by_id`] but a missing user is
    /// [`RepositoryError::NotFound`]
    fn fetch_user(&self, id: &str) -> Result<User, RepositoryError> {
        self.find_user_by_id(id)?.ok_or(RepositoryError::NotFound)
    }
}

pub trait ExerciseRepository {
    /// Stores an entry for a user the caller has already looked up
    fn add_exercise(&mut self, new_exercise: NewExercise) -> Result<ExerciseEntry, RepositoryError>;

    /// Entries matching the filter in insertion order, at most `filter.limit`
    fn query_exercises(&self, filter: &LogFilter) -> Result<Vec<ExerciseEntry>, RepositoryError>;
}
