//! Top stories tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::client::HnClient;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{json_result, parse_params};

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetTopStoriesParams {}

/// Top stories tool - ids of the current Hacker News front page.
pub struct GetTopStoriesTool;

impl GetTopStoriesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_top_stories";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the top stories from Hacker News.";

    /// Fetch the top story ids in upstream order.
    ///
    /// Never fails: an upstream failure yields an empty list.
    #[instrument(skip_all)]
    pub async fn execute(client: &HnClient) -> Vec<i64> {
        match client.top_stories().await {
            Ok(ids) => {
                info!("Fetched {} top stories", ids.len());
                ids
            }
            Err(e) => {
                warn!("Failed to fetch top stories, returning an empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Decode arguments, run the tool and shape the result.
    pub async fn call(
        client: &HnClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let _params: GetTopStoriesParams = parse_params(arguments)?;
        json_result(&Self::execute(client).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTopStoriesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for rmcp-driven transports.
    pub fn create_route<S>(client: HnClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move { Self::call(&client, args).await.map_err(McpError::from) }.boxed()
        })
    }
}
