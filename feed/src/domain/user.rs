//! Users and posts as delivered by the upstream API.

use serde::{Deserialize, Serialize};

/// Application user.
///
/// Values are produced by a [`UserPostsSource`](crate::domain::ports::UserPostsSource)
/// or a [`UserFactory`](crate::domain::ports::UserFactory) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Upstream user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact address, when the upstream exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the account is active.
    pub active: bool,
}

impl User {
    /// Build a user from its parts.
    pub fn new(id: i64, name: impl Into<String>, email: Option<String>, active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            active,
        }
    }
}

/// One post from a user's page of posts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Upstream post identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
}

impl Post {
    /// Build a post from its parts.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_serialises_to_camel_case_without_missing_email() {
        let user = User::new(7, "Amy", None, true);
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(value, json!({ "id": 7, "name": "Amy", "active": true }));
    }

    #[test]
    fn user_deserialises_without_email() {
        let user: User = serde_json::from_value(json!({ "id": 3, "name": "Bo", "active": false }))
            .expect("deserialise user");
        assert_eq!(user, User::new(3, "Bo", None, false));
    }
}
