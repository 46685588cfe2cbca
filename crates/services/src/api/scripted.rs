use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::error::TransportError;

/// In-memory transport replaying queued responses in order and recording requests.
///
/// Intended for tests and offline prototyping.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.push(Ok(ApiResponse::new(status, body)));
    }

    pub fn push_unreachable(&self) {
        self.push(Err(TransportError::Unreachable(
            "connection refused".to_string(),
        )));
    }

    fn push(&self, response: Result<ApiResponse, TransportError>) {
        if let Ok(mut guard) = self.responses.lock() {
            guard.push_back(response);
        }
    }

    /// Requests sent so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests
            .lock()
            .map_err(|err| TransportError::Unreachable(err.to_string()))?
            .push(request);
        self.responses
            .lock()
            .map_err(|err| TransportError::Unreachable(err.to_string()))?
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Unreachable(
                    "no scripted response".to_string(),
                ))
            })
    }
}
