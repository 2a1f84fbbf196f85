//! Session user identity.
//!
//! There is no account system: the running session owns exactly one
//! [`UserContext`] and threads it into every authorship and vote
//! operation. Keeping the identity explicit (rather than a global
//! constant) keeps the store itself multi-user clean.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity attached to everything a user writes or votes on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub id: UserId,
    pub username: String,
}

impl UserContext {
    /// Create a user with a fresh id.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
        }
    }

    /// Build the session user from the environment.
    ///
    /// Reads `STORYCHAIN_USER` for the username, falling back to
    /// `user123` when unset or empty.
    pub fn from_env() -> Self {
        let username = std::env::var("STORYCHAIN_USER")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "user123".to_string());
        Self::new(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = UserContext::new("alice");
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = UserContext::new("alice");
        let b = UserContext::new("alice");
        assert_ne!(a.id, b.id);
    }
}
