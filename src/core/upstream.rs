//! Pre-configured HTTP client for an upstream REST API.
//!
//! One [`UpstreamClient`] is built per upstream at startup and handed to the
//! tools that talk to it. The underlying `reqwest::Client` pools connections
//! and is cheap to clone, so every tool call shares the same configuration:
//! base URL, default headers, request timeout and redirect limit.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, redirect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Request timeout applied to every upstream call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Maximum number of redirects followed per request.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Errors raised by upstream calls.
///
/// The `Display` output is the original failure message so that callers can
/// prefix it with their own context.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure, timeout or non-2xx status.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The response body is not the expected JSON shape.
    #[error("error decoding response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured bearer token is not a valid header value.
    #[error("invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Connection settings for one upstream API.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `https://api.hackmd.io`.
    pub base_url: String,

    /// Static bearer token sent as `Authorization: Bearer <token>`.
    pub bearer_token: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Redirect limit.
    pub max_redirects: usize,
}

impl UpstreamConfig {
    /// Settings for `base_url` with the default timeout and redirect limit.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Attach a bearer token. Empty tokens are ignored.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.bearer_token = (!token.is_empty()).then_some(token);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("max_redirects", &self.max_redirects)
            .finish()
    }
}

/// HTTP client bound to a single upstream base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client from the given settings.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.bearer_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this client is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        self.http.request(method, self.url(path))
    }

    /// GET `path` and decode the JSON body.
    ///
    /// An empty body decodes as JSON `null`, so `T = Option<_>` yields `None`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await?
            .error_for_status()?;
        decode_body(response).await
    }

    /// POST a JSON body to `path` and decode the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, UpstreamError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        decode_body(response).await
    }

    /// PATCH a JSON body to `path`, discarding whatever the response carries.
    pub async fn patch_json<B>(&self, path: &str, body: &B) -> Result<(), UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UpstreamError> {
    let bytes = response.bytes().await?;
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };
    Ok(serde_json::from_slice(body)?)
}
