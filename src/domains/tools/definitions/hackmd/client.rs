//! HackMD API client.
//!
//! Thin wrappers over the v1 endpoints. Failures are returned as raw
//! [`UpstreamError`]s; the tools wrap them with call-site context.
//!
//! Successful bodies are handed back as JSON values, exactly as HackMD sent
//! them. The structs in [`super::types`] describe their declared shape.

use serde::Serialize;
use serde_json::Value;

use crate::core::config::HackmdConfig;
use crate::core::upstream::{UpstreamClient, UpstreamError};

/// Client for the HackMD v1 API, bound to one bearer token.
#[derive(Debug, Clone)]
pub struct HackmdClient {
    upstream: UpstreamClient,
}

impl HackmdClient {
    /// Build a client from configuration.
    pub fn new(config: &HackmdConfig) -> Result<Self, UpstreamError> {
        Ok(Self::from_upstream(UpstreamClient::new(&config.upstream())?))
    }

    /// Wrap an already configured upstream client.
    pub fn from_upstream(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// `GET /v1/me`
    pub async fn me(&self) -> Result<Value, UpstreamError> {
        self.upstream.get_json("/v1/me").await
    }

    /// `GET /v1/notes`
    pub async fn notes(&self) -> Result<Vec<Value>, UpstreamError> {
        self.upstream.get_json("/v1/notes").await
    }

    /// `GET /v1/notes/{id}`
    pub async fn note(&self, id: &str) -> Result<Value, UpstreamError> {
        self.upstream.get_json(&format!("/v1/notes/{id}")).await
    }

    /// `POST /v1/notes`
    pub async fn create_note<B>(&self, body: &B) -> Result<Value, UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        self.upstream.post_json("/v1/notes", body).await
    }

    /// `PATCH /v1/notes/{id}`. Upstream answers without a usable body.
    pub async fn patch_note<B>(&self, id: &str, body: &B) -> Result<(), UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        self.upstream.patch_json(&format!("/v1/notes/{id}"), body).await
    }
}

/// Client pointed at a mock server, authenticated with `test-token`.
#[cfg(test)]
pub(crate) fn test_client(server: &wiremock::MockServer) -> HackmdClient {
    use crate::core::upstream::UpstreamConfig;

    let config = UpstreamConfig::new(server.uri()).with_bearer_token("test-token");
    HackmdClient::from_upstream(UpstreamClient::new(&config).unwrap())
}
