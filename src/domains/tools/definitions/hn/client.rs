//! Hacker News API client.

use crate::core::config::HackerNewsConfig;
use crate::core::upstream::{UpstreamClient, UpstreamError};

use super::types::Story;

/// Client for the Hacker News Firebase API.
#[derive(Debug, Clone)]
pub struct HnClient {
    upstream: UpstreamClient,
}

impl HnClient {
    /// Build a client from configuration.
    pub fn new(config: &HackerNewsConfig) -> Result<Self, UpstreamError> {
        Ok(Self::from_upstream(UpstreamClient::new(&config.upstream())?))
    }

    /// Wrap an already configured upstream client.
    pub fn from_upstream(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// `GET /v0/topstories.json`. A `null` body yields an empty list.
    pub async fn top_stories(&self) -> Result<Vec<i64>, UpstreamError> {
        let ids: Option<Vec<i64>> = self.upstream.get_json("/v0/topstories.json").await?;
        Ok(ids.unwrap_or_default())
    }

    /// `GET /v0/item/{id}.json`. Unknown ids come back as `null`.
    pub async fn item(&self, id: i64) -> Result<Option<Story>, UpstreamError> {
        self.upstream.get_json(&format!("/v0/item/{id}.json")).await
    }
}
