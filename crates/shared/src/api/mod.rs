use const_format::concatcp;

pub mod payloads;

pub const API_BASE_PATH: &str = "/api/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    UserExercises,
    UserLogs,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:id/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:id/logs"),
        }
    }

    /// Path with the `:id` segment filled in
    pub fn id_path<T: ToString>(&self, id: T) -> String {
        self.path().replace(":id", &id.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::Object;

    #[test]
    fn test_paths() {
        assert_eq!(Object::Users.path(), "/api/users");
        assert_eq!(Object::UserExercises.id_path("abc"), "/api/users/abc/exercises");
        assert_eq!(Object::UserLogs.id_path(1), "/api/users/1/logs");
    }
}
