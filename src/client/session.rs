use serde::{Deserialize, Serialize};

/// The signed-in user a view acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub username: String,
}

impl Session {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Session {
            id,
            username: username.into(),
        }
    }
}
