//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

use crate::{
    model::{ExerciseEntry, LogFilter, NewExercise, NewUser, User},
    types::{CalendarDate, InputValue, Uuid},
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<InputValue>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser::from_input(req.username)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddExerciseRequest {
    pub description: Option<InputValue>,
    pub duration: Option<InputValue>,
    pub date: Option<InputValue>,
}

impl AddExerciseRequest {
    pub fn for_user(self, user_id: Uuid) -> NewExercise {
        NewExercise {
            user_id,
            description: self.description,
            duration: self.duration,
            date: self.date,
        }
    }
}

/// Query string of the log route. Kept as raw strings so bad values fall back
/// to defaults instead of failing extraction
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    pub fn filter(&self, user_id: Uuid) -> LogFilter {
        LogFilter::from_params(
            user_id,
            self.from.as_deref(),
            self.to.as_deref(),
            self.limit.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: Option<String>,
    pub date: CalendarDate,
    pub duration: Option<i64>,
    pub description: Option<String>,
}

impl ExerciseResponse {
    pub fn new(user: User, entry: ExerciseEntry) -> Self {
        Self {
            id: user.id,
            username: user.username,
            date: entry.date.into(),
            duration: entry.duration,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub date: CalendarDate,
}

impl From<ExerciseEntry> for LogEntry {
    fn from(entry: ExerciseEntry) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration,
            date: entry.date.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogResponse {
    pub username: Option<String>,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: User, entries: Vec<ExerciseEntry>) -> Self {
        Self {
            username: user.username,
            count: entries.len(),
            id: user.id,
            log: entries.into_iter().map(LogEntry::from).collect(),
        }
    }
}
