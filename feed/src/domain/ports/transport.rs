//! Driven port for raw request/response exchanges with the upstream API.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::define_port_error;

/// HTTP verb carried by a [`NetworkRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case verb as sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRequest {
    /// Path relative to the transport's base address.
    pub path: String,
    /// Verb to use.
    pub method: HttpMethod,
    /// Raw request body; empty for `GET`.
    pub body: Vec<u8>,
}

impl NetworkRequest {
    /// `GET` request with an empty body.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            body: Vec::new(),
        }
    }
}

/// Response returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkResponse {
    /// Status code, reported verbatim.
    pub code: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

define_port_error! {
    /// Errors surfaced by a [`Transport`] before any status code is known.
    pub enum TransportError {
        /// The connection failed or was dropped.
        Connection { message: String } =>
            "transport connection failed: {message}",
        /// The exchange exceeded its deadline.
        Timeout { message: String } =>
            "transport timed out: {message}",
        /// The request could not be built.
        InvalidRequest { message: String } =>
            "transport request invalid: {message}",
    }
}

/// Port for sending one request and receiving its response.
///
/// Non-success status codes are responses, not errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` and return the raw response.
    async fn execute(&self, request: NetworkRequest) -> Result<NetworkResponse, TransportError>;
}

/// Transport that answers every request with `200` and an empty body.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTransport;

#[async_trait]
impl Transport for FixtureTransport {
    async fn execute(&self, _request: NetworkRequest) -> Result<NetworkResponse, TransportError> {
        Ok(NetworkResponse {
            code: 200,
            body: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_requests_have_empty_bodies() {
        let request = NetworkRequest::get("/health");
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_empty());
        assert_eq!(request.path, "/health");
    }

    #[test]
    fn methods_render_upper_case() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(
            serde_json::to_string(&HttpMethod::Post).expect("serialise method"),
            "\"POST\""
        );
    }

    #[tokio::test]
    async fn fixture_transport_answers_ok() {
        let response = FixtureTransport
            .execute(NetworkRequest::get("/anything"))
            .await
            .expect("fixture response");
        assert_eq!(response.code, 200);
    }
}
