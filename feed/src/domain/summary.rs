//! Mapping users into summaries and positional feed items.

use serde::{Deserialize, Serialize};

use crate::domain::checksum::string_hash;
use crate::domain::user::User;

/// Subtitle for active users.
pub const ACTIVE_LABEL: &str = "Active";
/// Subtitle for inactive users.
pub const INACTIVE_LABEL: &str = "Inactive";

/// Compact view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Source user id.
    pub id: i64,
    /// Source user name.
    pub name: String,
    /// [`string_hash`] of `name`.
    pub checksum: i32,
    /// Source activity flag.
    pub active: bool,
}

/// One row of the feed, positioned by its index in the input list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Zero-based position; not the user id.
    pub id: i64,
    /// `User <name>`.
    pub title: String,
    /// [`ACTIVE_LABEL`] or [`INACTIVE_LABEL`].
    pub subtitle: String,
    /// Summary of the source user.
    pub summary: Summary,
}

/// Subtitle for a user's activity flag.
#[must_use]
pub const fn status_label(active: bool) -> &'static str {
    if active { ACTIVE_LABEL } else { INACTIVE_LABEL }
}

/// Position converted to an item id, saturating on absurdly long lists.
#[must_use]
pub fn position_id(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}

/// Summarise one user. The checksum depends on the name only.
///
/// # Examples
/// ```
/// use feed::domain::{User, to_summary};
///
/// let summary = to_summary(&User::new(7, "Amy", None, true));
/// assert_eq!(summary.checksum, 65_965);
/// ```
#[must_use]
pub fn to_summary(user: &User) -> Summary {
    Summary {
        id: user.id,
        name: user.name.clone(),
        checksum: string_hash(&user.name),
        active: user.active,
    }
}

/// Summarise every user, preserving order.
#[must_use]
pub fn to_summaries(users: &[User]) -> Vec<Summary> {
    users.iter().map(to_summary).collect()
}

/// Feed items for `users`, ids assigned from each user's position.
#[must_use]
pub fn to_feed_items(users: &[User]) -> Vec<FeedItem> {
    users
        .iter()
        .enumerate()
        .map(|(position, user)| FeedItem {
            id: position_id(position),
            title: format!("User {}", user.name),
            subtitle: status_label(user.active).to_owned(),
            summary: to_summary(user),
        })
        .collect()
}
