use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// `karma` only ever changes through
/// [`UserAction::UpdateKarma`](crate::user_actor::UserAction::UpdateKarma).
/// `password` is stored and serialized verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub karma: i64,
    /// Reserved. Never updated on its own.
    pub post_karma: i64,
    /// Reserved. Never updated on its own.
    pub comment_karma: i64,
}

impl User {
    /// Creates a new User with zero karma.
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            karma: 0,
            post_karma: 0,
            comment_karma: 0,
        }
    }
}

/// Payload for registering a new user.
///
/// Usernames are not required to be unique.
#[derive(Clone, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
}

impl RegisterUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
