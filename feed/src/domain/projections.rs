//! Auxiliary shapes derived from users and UI models.

use serde::{Deserialize, Serialize};

use crate::domain::checksum::string_hash;
use crate::domain::ui_model::UiModel;
use crate::domain::user::User;

/// A UI model sealed with a checksum of its header and error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateBlock {
    /// Captured model.
    pub state: UiModel,
    /// [`string_hash`] of `header` followed by `error` (or nothing).
    pub checksum: i32,
}

impl StateBlock {
    /// Capture `state` and compute its checksum.
    #[must_use]
    pub fn capture(state: UiModel) -> Self {
        let mut sealed = state.header.clone();
        if let Some(error) = &state.error {
            sealed.push_str(error);
        }
        Self {
            checksum: string_hash(&sealed),
            state,
        }
    }
}

/// A user tagged with its position in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    /// Tagged user.
    pub user: User,
    /// `User(<id>) idx=<index>`.
    pub label: String,
}

impl UserItem {
    /// Tag `user` with `index`.
    #[must_use]
    pub fn new(user: User, index: usize) -> Self {
        let label = format!("User({}) idx={index}", user.id);
        Self { user, label }
    }
}

/// Flat projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProjection {
    /// User id.
    pub id: i64,
    /// User name.
    pub label: String,
    /// Activity flag.
    pub active: bool,
}

impl From<&User> for UserProjection {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            label: user.name.clone(),
            active: user.active,
        }
    }
}

/// Project every user, preserving order.
#[must_use]
pub fn project_users(users: &[User]) -> Vec<UserProjection> {
    users.iter().map(UserProjection::from).collect()
}

/// Named analytics value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Event name.
    pub name: String,
    /// Event value.
    pub value: String,
}

impl AnalyticsEvent {
    /// Build an event.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `<name>:<value>`.
    #[must_use]
    pub fn log_line(&self) -> String {
        format!("{}:{}", self.name, self.value)
    }
}

/// `User: <name>` for each user.
#[must_use]
pub fn ui_text_list(users: &[User]) -> Vec<String> {
    users
        .iter()
        .map(|user| format!("User: {}", user.name))
        .collect()
}
