//! Single note tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::client::HackmdClient;
use super::error::HackmdError;
use super::types::Note;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{error_result, json_result, parse_params};

/// Parameters for the note lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNoteParams {
    /// The unique identifier of the note to retrieve.
    #[schemars(description = "The unique identifier of the note to retrieve.")]
    pub id: String,
}

/// Note lookup tool.
pub struct GetNoteTool;

impl GetNoteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_note";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a specific note by its ID from HackMD.";

    #[instrument(skip(client))]
    pub async fn execute(
        client: &HackmdClient,
        params: &GetNoteParams,
    ) -> Result<Value, HackmdError> {
        let note = client.note(&params.id).await.map_err(HackmdError::FetchNote)?;
        info!("Fetched HackMD note {}", params.id);
        Ok(note)
    }

    /// Decode arguments, run the tool and shape the result.
    pub async fn call(
        client: &HackmdClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetNoteParams = parse_params(arguments)?;
        match Self::execute(client, &params).await {
            Ok(note) => json_result(&note),
            Err(e) => Ok(error_result(&e.to_string())),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetNoteParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<Note>()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for rmcp-driven transports.
    pub fn create_route<S>(client: HackmdClient) -> ToolRoute<S>
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
