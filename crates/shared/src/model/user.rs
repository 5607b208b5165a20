use exemplar::Model;
use sea_query::Iden;

use crate::types::{InputValue, Uuid};

#[derive(Debug, Clone, PartialEq, Model)]
#[table("users")]
pub struct User {
    pub id: Uuid,
    pub username: Option<String>,
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Username,
}

/// A user that hasn't been stored yet. The username is kept exactly as given,
/// an absent one is stored as null
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewUser {
    pub username: Option<String>,
}

impl NewUser {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    pub fn from_input(username: Option<InputValue>) -> Self {
        Self {
            username: username.map(InputValue::into_text),
        }
    }

    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            username: self.username,
        }
    }
}
