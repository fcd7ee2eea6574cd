//! User snapshots and the loader that fetches them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::checksum::RollingChecksum;
use crate::domain::ports::{UserPostsSource, UserPostsSourceError};
use crate::domain::user::{Post, User};

/// Page size used when configuration does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One user plus a page of their posts, sealed with an integrity checksum.
///
/// `users` holds zero or one entries: zero when the source reported the user
/// as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Loaded users.
    pub users: Vec<User>,
    /// Loaded posts, in page order.
    pub posts: Vec<Post>,
    /// Checksum over `users` and `posts`, see [`snapshot_checksum`].
    pub checksum: i32,
}

impl Snapshot {
    /// Seal a snapshot, computing its checksum.
    #[must_use]
    pub fn from_parts(user: Option<User>, posts: Vec<Post>) -> Self {
        let checksum = snapshot_checksum(user.as_ref(), &posts);
        Self {
            users: user.into_iter().collect(),
            posts,
            checksum,
        }
    }

    /// First loaded user, if any.
    #[must_use]
    pub fn first_user(&self) -> Option<&User> {
        self.users.first()
    }
}

/// Rolling checksum over a user and their posts.
///
/// Folds the user's id and name, then each post's id and title in page
/// order. An absent user contributes nothing.
///
/// # Examples
/// ```
/// use feed::domain::{Post, User, snapshot_checksum};
///
/// let user = User::new(1, "Amy", None, true);
/// let posts = [Post::new(2, "Hi")];
/// assert_eq!(snapshot_checksum(Some(&user), &posts), 64_348_076);
/// ```
#[must_use]
pub fn snapshot_checksum(user: Option<&User>, posts: &[Post]) -> i32 {
    let seeded = user.map_or_else(RollingChecksum::new, |user| {
        RollingChecksum::new()
            .fold_long(user.id)
            .fold_str(&user.name)
    });
    posts
        .iter()
        .fold(seeded, |acc, post| acc.fold_long(post.id).fold_str(&post.title))
        .value()
}

/// Fetches snapshots through a [`UserPostsSource`].
pub struct SnapshotLoader<S: ?Sized> {
    source: Arc<S>,
    page_size: usize,
}

impl<S: ?Sized> SnapshotLoader<S> {
    /// Create a loader requesting `page_size` posts per snapshot.
    pub fn new(source: Arc<S>, page_size: usize) -> Self {
        Self { source, page_size }
    }

    /// Configured posts page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<S> SnapshotLoader<S>
where
    S: UserPostsSource + ?Sized,
{
    /// Fetch `user_id` and one page of their posts.
    ///
    /// # Errors
    ///
    /// Source failures are returned unchanged; nothing is retried.
    pub async fn load(&self, user_id: i64) -> Result<Snapshot, UserPostsSourceError> {
        let user = self.source.get_user(user_id).await?;
        let posts = self.source.get_posts(user_id, self.page_size).await?;
        debug!(
            user_id,
            user_found = user.is_some(),
            post_count = posts.len(),
            "user snapshot loaded"
        );
        Ok(Snapshot::from_parts(user, posts))
    }
}
