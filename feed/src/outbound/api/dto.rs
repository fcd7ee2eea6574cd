//! DTOs for decoding the JSON API's user and post payloads.

use serde::Deserialize;

use crate::domain::{Post, User};

#[derive(Debug, Deserialize)]
pub(super) struct ApiUserDto {
    pub(super) id: i64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) email: Option<String>,
    /// Absent on APIs without account status; treated as active.
    #[serde(default)]
    pub(super) active: Option<bool>,
}

/// Post payload. `userId` and `body` are present upstream and ignored here.
#[derive(Debug, Deserialize)]
pub(super) struct ApiPostDto {
    pub(super) id: i64,
    pub(super) title: String,
}

impl From<ApiUserDto> for User {
    fn from(dto: ApiUserDto) -> Self {
        User::new(dto.id, dto.name, dto.email, dto.active.unwrap_or(true))
    }
}

impl From<ApiPostDto> for Post {
    fn from(dto: ApiPostDto) -> Self {
        Post::new(dto.id, dto.title)
    }
}
