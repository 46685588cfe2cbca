use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully resolved request. POST bodies are always JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
}

/// Raw response handed back to callers; non-2xx statuses are not errors here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, substituting `{}` for malformed content.
    #[must_use]
    pub fn json_or_empty(&self) -> Value {
        edumate_core::model::envelope::parse_lenient(&self.body)
    }
}

/// Sends requests over the wire. Swappable so flows can be tested offline.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request and collect the full body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` only when no response was received at all.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => {
                let body = request.body.unwrap_or_else(|| Value::Object(Map::new()));
                self.client.post(&request.url).json(&body)
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError::Unreachable(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
