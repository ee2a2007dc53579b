//! Note update tool definition.
//!
//! HackMD's PATCH endpoint does not reliably return the updated note, so an
//! update is two round-trips: PATCH the provided fields, then GET the note
//! back. The GET only runs once the PATCH has succeeded. If the GET fails the
//! PATCH is not rolled back: upstream already holds the new content and the
//! caller only sees the fetch failure.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::client::HackmdClient;
use super::error::HackmdError;
use super::types::{Note, NotePermissionRole};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{error_result, json_result, parse_params};

/// Parameters for the note update tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteParams {
    /// The unique identifier of the note to update.
    #[schemars(description = "The unique identifier of the note to update.")]
    pub note_id: String,

    #[schemars(
        description = "The new content for the note in Markdown format. If not provided, the content will remain unchanged."
    )]
    #[serde(default)]
    pub content: Option<String>,

    #[schemars(
        description = "The new read permission level for the note. If not provided, the read permission will remain unchanged."
    )]
    #[serde(default)]
    pub read_permission: Option<NotePermissionRole>,

    #[schemars(
        description = "The new write permission level for the note. If not provided, the write permission will remain unchanged."
    )]
    #[serde(default)]
    pub write_permission: Option<NotePermissionRole>,
}

/// PATCH body: only the fields being changed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteChanges<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    read_permission: Option<NotePermissionRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    write_permission: Option<NotePermissionRole>,
}

impl<'a> From<&'a UpdateNoteParams> for NoteChanges<'a> {
    fn from(params: &'a UpdateNoteParams) -> Self {
        Self {
            content: params.content.as_deref(),
            read_permission: params.read_permission,
            write_permission: params.write_permission,
        }
    }
}

/// Note update tool.
pub struct UpdateNoteTool;

impl UpdateNoteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_note";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Update a note's content or permissions from HackMD for the current user";

    /// Patch the note, then re-fetch it.
    #[instrument(skip_all, fields(note_id = %params.note_id))]
    pub async fn execute(
        client: &HackmdClient,
        params: &UpdateNoteParams,
    ) -> Result<Value, HackmdError> {
        client
            .patch_note(&params.note_id, &NoteChanges::from(params))
            .await
            .map_err(HackmdError::UpdateNote)?;
        info!("Patched HackMD note {}", params.note_id);

        let note = client.note(&params.note_id).await.map_err(|e| {
            warn!(
                "Note {} was updated but could not be fetched back",
                params.note_id
            );
            HackmdError::FetchNote(e)
        })?;
        Ok(note)
    }

    /// Decode arguments, run the tool and shape the result.
    pub async fn call(
        client: &HackmdClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let params: UpdateNoteParams = parse_params(arguments)?;
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
            input_schema: cached_schema_for_type::<UpdateNoteParams>(),
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
