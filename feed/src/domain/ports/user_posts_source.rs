//! Driven port for fetching a user and a page of their posts.
//!
//! The domain owns the contract so the snapshot loader works the same
//! against the JSON API adapter and the in-memory fixture.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::user::{Post, User};

define_port_error! {
    /// Errors surfaced while reading users or posts.
    pub enum UserPostsSourceError {
        /// The upstream could not be reached or answered with a failure.
        Unavailable { message: String } =>
            "user posts source unavailable: {message}",
        /// The upstream did not answer in time.
        Timeout { message: String } =>
            "user posts source timed out: {message}",
        /// The upstream answered with a payload that could not be decoded.
        Decode { message: String } =>
            "user posts source response decode failed: {message}",
    }
}

/// Port for reading users and their posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserPostsSource: Send + Sync {
    /// Fetch one user; `Ok(None)` when the upstream has no such user.
    ///
    /// # Examples
    ///
    /// ```
    /// use feed::domain::ports::{FixtureUserPostsSource, UserPostsSource};
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let user = FixtureUserPostsSource.get_user(4).await?;
    /// assert_eq!(user.map(|user| user.name), Some("User 4".to_owned()));
    /// # Ok::<(), feed::domain::ports::UserPostsSourceError>(())
    /// # }).unwrap();
    /// ```
    async fn get_user(&self, id: i64) -> Result<Option<User>, UserPostsSourceError>;

    /// Fetch up to `page_size` posts written by `user_id`, in upstream order.
    async fn get_posts(
        &self,
        user_id: i64,
        page_size: usize,
    ) -> Result<Vec<Post>, UserPostsSourceError>;
}

/// Deterministic in-memory source.
///
/// Non-negative ids resolve to `User <id>` (active when the id is even) with
/// posts `Post <n> by User <id>`; negative ids have no user and no posts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserPostsSource;

#[async_trait]
impl UserPostsSource for FixtureUserPostsSource {
    async fn get_user(&self, id: i64) -> Result<Option<User>, UserPostsSourceError> {
        if id < 0 {
            return Ok(None);
        }
        Ok(Some(User::new(
            id,
            format!("User {id}"),
            Some(format!("user{id}@example.com")),
            id % 2 == 0,
        )))
    }

    async fn get_posts(
        &self,
        user_id: i64,
        page_size: usize,
    ) -> Result<Vec<Post>, UserPostsSourceError> {
        if user_id < 0 {
            return Ok(Vec::new());
        }
        let posts = (1..=page_size)
            .map_while(|n| i64::try_from(n).ok())
            .map(|n| {
                Post::new(
                    user_id.saturating_mul(1000).saturating_add(n),
                    format!("Post {n} by User {user_id}"),
                )
            })
            .collect();
        Ok(posts)
    }
}
