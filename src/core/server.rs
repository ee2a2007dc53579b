//! MCP Server implementation and lifecycle management.
//!
//! The server owns the tool registry and the rmcp ToolRouter built from it.
//! rmcp-driven transports (STDIO, streamable HTTP) go through the router via
//! `#[tool_handler]`; the plain JSON-RPC endpoint uses `list_tools` and
//! `call_tool` directly. Both paths end up in the same tool `call` functions.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Implementation, JsonObject, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

const HACKER_NEWS_INSTRUCTIONS: &str = "This MCP server provides access to Hacker News data.";
const HACKMD_INSTRUCTIONS: &str =
    "This MCP server provides access to HackMD data and posting notes capabilities.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Enabled services and their clients.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if an upstream HTTP client cannot be built (for example a
    /// token that is not a valid header value).
    pub fn new(config: Config) -> CoreResult<Self> {
        let registry = ToolRegistry::new(&config)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an existing registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Instructions for clients, one sentence per enabled service.
    pub fn instructions(&self) -> String {
        let mut parts = Vec::new();
        if self.registry.hacker_news().is_some() {
            parts.push(HACKER_NEWS_INSTRUCTIONS);
        }
        if self.registry.hackmd().is_some() {
            parts.push(HACKMD_INSTRUCTIONS);
        }
        parts.join(" ")
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for the JSON-RPC endpoint).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                let mut tool = serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                });
                if let Some(output_schema) = t.output_schema {
                    tool["outputSchema"] = serde_json::Value::Object((*output_schema).clone());
                }
                tool
            })
            .collect()
    }

    /// Call a tool by name (for the JSON-RPC endpoint).
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        info!("Calling tool {}", name);
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ServiceSelection;

    fn server_for(selection: ServiceSelection) -> McpServer {
        let mut config = Config::default();
        config.services.selection = selection;
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_instructions_follow_selection() {
        let all = server_for(ServiceSelection::All).instructions();
        assert!(all.contains("Hacker News"));
        assert!(all.contains("HackMD"));

        let hn = server_for(ServiceSelection::HackerNews).instructions();
        assert_eq!(hn, HACKER_NEWS_INSTRUCTIONS);

        let hackmd = server_for(ServiceSelection::Hackmd).instructions();
        assert_eq!(hackmd, HACKMD_INSTRUCTIONS);
    }

    #[test]
    fn test_get_info_advertises_tools_only() {
        let info = server_for(ServiceSelection::All).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "news-notes-mcp-server");
    }

    #[test]
    fn test_list_tools_includes_schemas() {
        let tools = server_for(ServiceSelection::All).list_tools();
        assert_eq!(tools.len(), 7);

        let get_note = tools
            .iter()
            .find(|t| t["name"] == "get_note")
            .expect("get_note listed");
        assert!(get_note["inputSchema"].is_object());
        assert!(get_note["outputSchema"].is_object());

        let top = tools
            .iter()
            .find(|t| t["name"] == "get_top_stories")
            .expect("get_top_stories listed");
        assert!(top.get("outputSchema").is_none());
    }

    #[test]
    fn test_tool_handler_uses_router() {
        fn as_handler<H: ServerHandler>(handler: &H) -> ServerInfo {
            handler.get_info()
        }

        let server = server_for(ServiceSelection::Hackmd);
        assert!(as_handler(&server).capabilities.tools.is_some());
        assert_eq!(server.tool_router.list_all().len(), 5);
        assert!(server.tool_router.has_route("update_note"));
        assert!(!server.tool_router.has_route("get_story"));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let server = server_for(ServiceSelection::HackerNews);
        let result = server.call_tool("post_note", None).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
