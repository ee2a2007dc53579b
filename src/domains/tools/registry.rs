//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry owns one client per enabled upstream service. It lists the
//! tools those services expose and dispatches calls that do not go through
//! the rmcp router (the plain JSON-RPC HTTP endpoint).

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use crate::core::config::Config;
use crate::core::upstream::UpstreamError;

use super::ToolError;
use super::definitions::{
    GetNoteTool, GetStoryTool, GetTopStoriesTool, GetUserTool, HackmdClient, HnClient,
    ListNotesTool, PostNoteTool, UpdateNoteTool,
};

/// Tool registry - manages all available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    hacker_news: Option<HnClient>,
    hackmd: Option<HackmdClient>,
}

impl ToolRegistry {
    /// Create a registry with a client for every service enabled in `config`.
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let hacker_news = if config.services.hacker_news_enabled() {
            Some(HnClient::new(&config.hacker_news)?)
        } else {
            None
        };
        let hackmd = if config.services.hackmd_enabled() {
            Some(HackmdClient::new(&config.hackmd)?)
        } else {
            None
        };

        let registry = Self {
            hacker_news,
            hackmd,
        };
        info!("Tool registry ready: {:?}", registry.tool_names());
        Ok(registry)
    }

    /// Build a registry from already constructed clients.
    pub fn from_clients(hacker_news: Option<HnClient>, hackmd: Option<HackmdClient>) -> Self {
        Self {
            hacker_news,
            hackmd,
        }
    }

    /// Hacker News client, if that service is enabled.
    pub fn hacker_news(&self) -> Option<&HnClient> {
        self.hacker_news.as_ref()
    }

    /// HackMD client, if that service is enabled.
    pub fn hackmd(&self) -> Option<&HackmdClient> {
        self.hackmd.as_ref()
    }

    /// Names of all enabled tools.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.hacker_news.is_some() {
            names.extend([GetTopStoriesTool::NAME, GetStoryTool::NAME]);
        }
        if self.hackmd.is_some() {
            names.extend([
                GetUserTool::NAME,
                ListNotesTool::NAME,
                GetNoteTool::NAME,
                PostNoteTool::NAME,
                UpdateNoteTool::NAME,
            ]);
        }
        names
    }

    /// All enabled tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = Vec::new();
        if self.hacker_news.is_some() {
            tools.extend([GetTopStoriesTool::to_tool(), GetStoryTool::to_tool()]);
        }
        if self.hackmd.is_some() {
            tools.extend([
                GetUserTool::to_tool(),
                ListNotesTool::to_tool(),
                GetNoteTool::to_tool(),
                PostNoteTool::to_tool(),
                UpdateNoteTool::to_tool(),
            ]);
        }
        tools
    }

    /// Dispatch a tool call by name.
    ///
    /// Tools belonging to a disabled service are reported as not found.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        if let Some(client) = &self.hacker_news {
            match name {
                GetTopStoriesTool::NAME => return GetTopStoriesTool::call(client, arguments).await,
                GetStoryTool::NAME => return GetStoryTool::call(client, arguments).await,
                _ => {}
            }
        }
        if let Some(client) = &self.hackmd {
            match name {
                GetUserTool::NAME => return GetUserTool::call(client, arguments).await,
                ListNotesTool::NAME => return ListNotesTool::call(client, arguments).await,
                GetNoteTool::NAME => return GetNoteTool::call(client, arguments).await,
                PostNoteTool::NAME => return PostNoteTool::call(client, arguments).await,
                UpdateNoteTool::NAME => return UpdateNoteTool::call(client, arguments).await,
                _ => {}
            }
        }
        warn!("Unknown tool requested: {}", name);
        Err(ToolError::not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ServiceSelection;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(selection: ServiceSelection) -> Config {
        let mut config = Config::default();
        config.services.selection = selection;
        config
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(&Config::default()).unwrap();
        let names = registry.tool_names();
        assert_eq!(names.len(), 7);
        for name in [
            "get_top_stories",
            "get_story",
            "get_user",
            "list_notes",
            "get_note",
            "post_note",
            "update_note",
        ] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn test_registry_tools_match_names() {
        let registry = ToolRegistry::new(&Config::default()).unwrap();
        let tool_names: Vec<_> = registry.tools().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(tool_names, registry.tool_names());
    }

    #[test]
    fn test_registry_hacker_news_only() {
        let registry = ToolRegistry::new(&config_for(ServiceSelection::HackerNews)).unwrap();
        assert_eq!(registry.tool_names(), vec!["get_top_stories", "get_story"]);
        assert!(registry.hackmd().is_none());
    }

    #[test]
    fn test_registry_hackmd_only() {
        let registry = ToolRegistry::new(&config_for(ServiceSelection::Hackmd)).unwrap();
        assert_eq!(registry.tool_names().len(), 5);
        assert!(registry.hacker_news().is_none());
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(&Config::default()).unwrap();
        let result = registry.call_tool("unknown", None).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_registry_call_disabled_service() {
        let registry = ToolRegistry::new(&config_for(ServiceSelection::HackerNews)).unwrap();
        let result = registry.call_tool("get_user", None).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_registry_dispatches_to_hacker_news() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/topstories.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([3, 1, 2])))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config_for(ServiceSelection::HackerNews);
        config.hacker_news.api_url = server.uri();
        let registry = ToolRegistry::new(&config).unwrap();

        let result = registry.call_tool("get_top_stories", None).await.unwrap();
        assert!(!result.is_error.unwrap_or(false));
    }
}
