//! Note listing tool definition.

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
use super::types::NoteList;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{error_result, json_result, parse_params};

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListNotesParams {}

/// Note listing tool - every note the token's owner can access.
pub struct ListNotesTool;

impl ListNotesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_notes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all notes the user has access to in HackMD.";

    /// Fetch all notes, always wrapped as `{ notes: [...] }`.
    #[instrument(skip_all)]
    pub async fn execute(client: &HackmdClient) -> Result<NoteList<Value>, HackmdError> {
        let notes = client.notes().await.map_err(HackmdError::FetchNotes)?;
        info!("Fetched {} HackMD notes", notes.len());
        Ok(NoteList { notes })
    }

    /// Decode arguments, run the tool and shape the result.
    pub async fn call(
        client: &HackmdClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let _params: ListNotesParams = parse_params(arguments)?;
        match Self::execute(client).await {
            Ok(list) => json_result(&list),
            Err(e) => Ok(error_result(&e.to_string())),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListNotesParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<NoteList>()),
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

#[cfg(test)]
mod tests {
    use super::super::client::test_client;
    use super::super::types::fixtures;
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with_notes(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/notes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_empty_list_is_wrapped() {
        let server = server_with_notes(json!([])).await;
        let result = ListNotesTool::call(&test_client(&server), None).await.unwrap();
        assert_eq!(result.structured_content, Some(json!({"notes": []})));
    }

    #[tokio::test]
    async fn test_single_note_is_wrapped() {
        let note = fixtures::note("note-1", "# One");
        let server = server_with_notes(json!([note.clone()])).await;
        let result = ListNotesTool::call(&test_client(&server), None).await.unwrap();
        assert_eq!(result.structured_content, Some(json!({"notes": [note]})));
    }

    #[tokio::test]
    async fn test_several_notes_keep_order() {
        let server = server_with_notes(json!([
            fixtures::note("b", "x"),
            fixtures::note("a", "y"),
        ]))
        .await;
        let list = ListNotesTool::execute(&test_client(&server)).await.unwrap();
        let ids: Vec<_> = list.notes.iter().map(|n| n["id"].as_str()).collect();
        assert_eq!(ids, vec![Some("b"), Some("a")]);
    }

    #[tokio::test]
    async fn test_failure_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/notes"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = ListNotesTool::execute(&test_client(&server)).await.unwrap_err();
        assert!(err.to_string().starts_with("Error fetching notes from HackMD: "));
    }
}
