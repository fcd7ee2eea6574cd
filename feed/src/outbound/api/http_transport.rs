//! Reqwest-backed transport sending raw requests to `{base}{path}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};

use super::resolve;
use crate::domain::ports::{HttpMethod, NetworkRequest, NetworkResponse, Transport, TransportError};

/// Transport performing real HTTP exchanges.
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Build a transport whose exchanges give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: NetworkRequest) -> Result<NetworkResponse, TransportError> {
        let url = resolve(&self.base, &request.path).map_err(|error| {
            TransportError::invalid_request(format!("invalid path {}: {error}", request.path))
        })?;
        let mut builder = self.client.request(to_method(request.method), url);
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }
        let response = builder.send().await.map_err(map_transport_error)?;
        let code = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok(NetworkResponse {
            code,
            body: body.to_vec(),
        })
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else if error.is_builder() {
        TransportError::invalid_request(error.to_string())
    } else {
        TransportError::connection(error.to_string())
    }
}
