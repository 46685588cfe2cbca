use std::sync::Arc;

use edumate_core::ApiBase;
use serde::Serialize;
use tracing::debug;

use super::transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport};
use crate::error::TransportError;

#[derive(Clone)]
pub struct ApiClient {
    base: ApiBase,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base: ApiBase, transport: Arc<dyn HttpTransport>) -> Self {
        Self { base, transport }
    }

    #[must_use]
    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Issue a GET against the path built from `segments`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the server could not be reached.
    pub async fn get(&self, segments: &[&str]) -> Result<ApiResponse, TransportError> {
        let url = self.base.endpoint(segments);
        debug!(%url, "GET");
        self.transport
            .send(ApiRequest {
                method: HttpMethod::Get,
                url,
                body: None,
            })
            .await
    }

    /// Issue a POST with `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the body cannot be encoded or the server could
    /// not be reached.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<ApiResponse, TransportError> {
        let url = self.base.endpoint(segments);
        let body =
            serde_json::to_value(body).map_err(|err| TransportError::Encode(err.to_string()))?;
        debug!(%url, "POST");
        self.transport
            .send(ApiRequest {
                method: HttpMethod::Post,
                url,
                body: Some(body),
            })
            .await
    }
}
