//! Reqwest-backed user/posts source.
//!
//! Reads `GET {base}/users/{id}` and `GET {base}/posts?userId={id}&_limit={n}`.
//! A `404` on the user endpoint means the user does not exist.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{ApiPostDto, ApiUserDto};
use super::{body_preview, resolve};
use crate::domain::ports::{UserPostsSource, UserPostsSourceError};
use crate::domain::{Post, User};

/// User/posts source calling a JSON API over HTTP.
pub struct HttpUserPostsSource {
    client: Client,
    base: Url,
}

impl HttpUserPostsSource {
    /// Build a source whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, UserPostsSourceError> {
        resolve(&self.base, path).map_err(|error| {
            UserPostsSourceError::unavailable(format!("invalid endpoint {path}: {error}"))
        })
    }

    async fn fetch(&self, url: Url) -> Result<(StatusCode, Vec<u8>), UserPostsSourceError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl UserPostsSource for HttpUserPostsSource {
    async fn get_user(&self, id: i64) -> Result<Option<User>, UserPostsSourceError> {
        let url = self.endpoint(&format!("users/{id}"))?;
        let (status, body) = self.fetch(url).await?;
        if status == StatusCode::NOT_FOUND {
            debug!(user_id = id, "user not found upstream");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        let user: ApiUserDto = decode(&body)?;
        Ok(Some(user.into()))
    }

    async fn get_posts(
        &self,
        user_id: i64,
        page_size: usize,
    ) -> Result<Vec<Post>, UserPostsSourceError> {
        let mut url = self.endpoint("posts")?;
        url.query_pairs_mut()
            .append_pair("userId", &user_id.to_string())
            .append_pair("_limit", &page_size.to_string());
        let (status, body) = self.fetch(url).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        let posts: Vec<ApiPostDto> = decode(&body)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, UserPostsSourceError> {
    serde_json::from_slice(body)
        .map_err(|error| UserPostsSourceError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> UserPostsSourceError {
    if error.is_timeout() {
        UserPostsSourceError::timeout(error.to_string())
    } else {
        UserPostsSourceError::unavailable(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserPostsSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserPostsSourceError::timeout(message)
        }
        _ => UserPostsSourceError::unavailable(message),
    }
}
