//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use super::upstream::UpstreamConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the Hacker News API.
pub const DEFAULT_HACKER_NEWS_API_URL: &str = "https://hacker-news.firebaseio.com";

/// Default base URL of the HackMD API.
pub const DEFAULT_HACKMD_API_URL: &str = "https://api.hackmd.io";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Which upstream services are exposed as tools.
    pub services: ServicesConfig,

    /// Hacker News upstream settings.
    pub hacker_news: HackerNewsConfig,

    /// HackMD upstream settings.
    pub hackmd: HackmdConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Selection of upstream services to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceSelection {
    /// Both Hacker News and HackMD tools.
    #[default]
    All,
    /// Only the Hacker News tools.
    HackerNews,
    /// Only the HackMD tools.
    Hackmd,
}

impl ServiceSelection {
    /// Parse a selection from its kebab-case name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" | "" => Some(Self::All),
            "hacker-news" | "hackernews" | "hn" => Some(Self::HackerNews),
            "hackmd" => Some(Self::Hackmd),
            _ => None,
        }
    }
}

/// Configuration for the exposed services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub selection: ServiceSelection,
}

impl ServicesConfig {
    pub fn hacker_news_enabled(&self) -> bool {
        matches!(
            self.selection,
            ServiceSelection::All | ServiceSelection::HackerNews
        )
    }

    pub fn hackmd_enabled(&self) -> bool {
        matches!(self.selection, ServiceSelection::All | ServiceSelection::Hackmd)
    }
}

/// Hacker News API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HackerNewsConfig {
    /// Base URL of the Hacker News API.
    pub api_url: String,
}

impl HackerNewsConfig {
    /// Upstream client settings for this API.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(&self.api_url)
    }
}

impl Default for HackerNewsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_HACKER_NEWS_API_URL.to_string(),
        }
    }
}

/// HackMD API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct HackmdConfig {
    /// Base URL of the HackMD API.
    pub api_url: String,

    /// Static API token. Empty means unauthenticated.
    pub api_token: String,
}

impl HackmdConfig {
    /// Upstream client settings for this API, with the bearer token attached.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(&self.api_url).with_bearer_token(self.api_token.clone())
    }
}

impl Default for HackmdConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_HACKMD_API_URL.to_string(),
            api_token: String::new(),
        }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for HackmdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.api_token.is_empty() {
            "[EMPTY]"
        } else {
            "[REDACTED]"
        };
        f.debug_struct("HackmdConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &token)
            .finish()
    }
}

/// Logging configuration.
///
/// Loaded on its own, ahead of [`Config`]: the subscriber must be installed
/// before `Config::from_env` logs anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load the log level from `MCP_LOG_LEVEL`, defaulting to `info`.
    pub fn from_env() -> Self {
        let mut logging = Self::default();
        if let Some(level) = non_empty_var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

/// Read an environment variable, treating an empty value as unset.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "news-notes-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            services: ServicesConfig::default(),
            hacker_news: HackerNewsConfig::default(),
            hackmd: HackmdConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_SERVICES`, `MCP_TRANSPORT`, ...). Upstream settings keep their
    /// service names: `HACKER_NEWS_API_URL`, `HACKMD_API_URL` and
    /// `HACKMD_API_TOKEN`. An empty API URL falls back to the default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(services) = std::env::var("MCP_SERVICES") {
            match ServiceSelection::parse(&services) {
                Some(selection) => config.services.selection = selection,
                None => warn!("Unknown MCP_SERVICES value '{}', exposing all services", services),
            }
        }

        config.transport = TransportConfig::from_env();

        if let Some(url) = non_empty_var("HACKER_NEWS_API_URL") {
            config.hacker_news.api_url = url;
        }

        if let Some(url) = non_empty_var("HACKMD_API_URL") {
            config.hackmd.api_url = url;
        }

        match std::env::var("HACKMD_API_TOKEN") {
            Ok(token) if !token.is_empty() => {
                config.hackmd.api_token = token;
                info!("HackMD API token loaded from environment");
            }
            _ if config.services.hackmd_enabled() => {
                warn!("HACKMD_API_TOKEN not set - HackMD requests will be unauthenticated");
            }
            _ => {}
        }

        config
    }
}
