//! Story lookup tool definition.

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
use super::types::Story;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{json_result, parse_params};

/// Parameters for the story lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetStoryParams {
    /// The ID of the story to retrieve.
    #[schemars(description = "The ID of the story to retrieve.")]
    pub id: i64,
}

/// Story lookup tool - one Hacker News item by id.
pub struct GetStoryTool;

impl GetStoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_story";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the details of a story from Hacker News by its ID. The ID should be provided as a parameter.";

    /// Fetch a story.
    ///
    /// `None` means upstream had no data for the id (or could not be
    /// reached); it is a normal outcome, not an error.
    #[instrument(skip(client))]
    pub async fn execute(client: &HnClient, params: &GetStoryParams) -> Option<Story> {
        match client.item(params.id).await {
            Ok(Some(story)) => {
                info!("Fetched story {}", story.id);
                Some(story)
            }
            Ok(None) => {
                info!("No story found for id {}", params.id);
                None
            }
            Err(e) => {
                warn!("Failed to fetch story {}, returning null: {}", params.id, e);
                None
            }
        }
    }

    /// Decode arguments, run the tool and shape the result.
    pub async fn call(
        client: &HnClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let params: GetStoryParams = parse_params(arguments)?;
        json_result(&Self::execute(client, &params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetStoryParams>(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::upstream::{UpstreamClient, UpstreamConfig};
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HnClient {
        HnClient::from_upstream(UpstreamClient::new(&UpstreamConfig::new(server.uri())).unwrap())
    }

    fn story_json(id: i64) -> serde_json::Value {
        json!({
            "by": "dhouston",
            "descendants": 71,
            "id": id,
            "kids": [9224, 8917],
            "score": 111,
            "time": 1175714200,
            "title": "My YC app: Dropbox - Throw away your USB drive",
            "type": "story",
            "url": "http://www.getdropbox.com/u/2/screencast.html"
        })
    }

    #[tokio::test]
    async fn test_story_id_matches_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/item/8863.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(story_json(8863)))
            .expect(1)
            .mount(&server)
            .await;

        let story = GetStoryTool::execute(&client_for(&server), &GetStoryParams { id: 8863 })
            .await
            .unwrap();
        assert_eq!(story.id, 8863);
        assert_eq!(story.by.as_deref(), Some("dhouston"));
        assert_eq!(story.kids, Some(vec![9224, 8917]));
    }

    #[tokio::test]
    async fn test_deleted_story_is_returned() {
        let deleted = json!({"id": 42, "deleted": true, "type": "story", "time": 1200000000});
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/item/42.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(deleted.clone()))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let story = GetStoryTool::execute(&client, &GetStoryParams { id: 42 })
            .await
            .unwrap();
        assert_eq!(story.id, 42);
        assert!(story.by.is_none());

        let args = json!({"id": 42}).as_object().cloned();
        let result = GetStoryTool::call(&client, args).await.unwrap();
        assert_eq!(result.structured_content, Some(deleted));
    }

    #[tokio::test]
    async fn test_unknown_story_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/item/-1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let story = GetStoryTool::execute(&client_for(&server), &GetStoryParams { id: -1 }).await;
        assert!(story.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/item/5.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let story = GetStoryTool::execute(&client_for(&server), &GetStoryParams { id: 5 }).await;
        assert!(story.is_none());
    }

    #[tokio::test]
    async fn test_call_null_is_success_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/item/-1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let args = json!({"id": -1}).as_object().cloned();
        let result = GetStoryTool::call(&client_for(&server), args).await.unwrap();
        assert!(!result.is_error.unwrap_or(false));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "null"),
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_call_story_is_structured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/item/8863.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(story_json(8863)))
            .mount(&server)
            .await;

        let args = json!({"id": 8863}).as_object().cloned();
        let result = GetStoryTool::call(&client_for(&server), args).await.unwrap();
        assert_eq!(result.structured_content, Some(story_json(8863)));
    }

    #[tokio::test]
    async fn test_call_missing_id_is_invalid() {
        let server = MockServer::start().await;
        let result = GetStoryTool::call(&client_for(&server), None).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    // Integration tests (require network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_story() {
        let client = HnClient::new(&Default::default()).unwrap();
        let story = GetStoryTool::execute(&client, &GetStoryParams { id: 1 }).await;
        assert_eq!(story.map(|s| s.id), Some(1));

        let missing = GetStoryTool::execute(&client, &GetStoryParams { id: -1 }).await;
        assert!(missing.is_none());
    }
}
