//! Note creation tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::client::HackmdClient;
use super::error::HackmdError;
use super::types::{CommentPermissionType, NoteCore, NotePermissionRole, SuggestEditPermissionType};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{error_result, json_result, parse_params};

/// Parameters for the note creation tool.
///
/// Serialized as-is for the request body; unset fields are omitted so that
/// HackMD applies its own defaults.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostNoteParams {
    /// The content of the note in Markdown format.
    #[schemars(description = "The content of the note in Markdown format.")]
    pub content: String,

    #[schemars(
        description = "The ID of the parent folder to place the note in. If not provided, the note will be created in the root directory."
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<String>,

    #[schemars(
        description = "The permalink for the note. If not provided, a default permalink will be generated."
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    #[schemars(description = "The suggest edit permission level for the note. Default is disabled.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_edit_permission: Option<SuggestEditPermissionType>,

    #[schemars(description = "The comment permission level for the note. Default is disabled.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_permission: Option<CommentPermissionType>,

    #[schemars(description = "The read permission level for the note. Default is owner.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_permission: Option<NotePermissionRole>,

    #[schemars(description = "The write permission level for the note. Default is owner.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_permission: Option<NotePermissionRole>,
}

/// Note creation tool.
pub struct PostNoteTool;

impl PostNoteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "post_note";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Post a new note to HackMD.";

    /// Create a note and return it as HackMD reports it.
    #[instrument(skip_all)]
    pub async fn execute(
        client: &HackmdClient,
        params: &PostNoteParams,
    ) -> Result<Value, HackmdError> {
        let note = client
            .create_note(params)
            .await
            .map_err(HackmdError::PostNote)?;
        info!("Created HackMD note {}", note["id"]);
        Ok(note)
    }

    /// Decode arguments, run the tool and shape the result.
    pub async fn call(
        client: &HackmdClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let params: PostNoteParams = parse_params(arguments)?;
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
            input_schema: cached_schema_for_type::<PostNoteParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<NoteCore>()),
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
