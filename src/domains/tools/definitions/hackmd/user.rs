//! Current user tool definition.

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
use super::types::User;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{error_result, json_result, parse_params};

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetUserParams {}

/// Current user tool - the profile behind the configured token.
pub struct GetUserTool;

impl GetUserTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_user";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get user information from HackMD.";

    #[instrument(skip_all)]
    pub async fn execute(client: &HackmdClient) -> Result<Value, HackmdError> {
        let user = client.me().await.map_err(HackmdError::FetchUser)?;
        info!(
            "Fetched HackMD user {} ({} teams)",
            user["userPath"],
            user["teams"].as_array().map_or(0, Vec::len)
        );
        Ok(user)
    }

    /// Decode arguments, run the tool and shape the result.
    pub async fn call(
        client: &HackmdClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let _params: GetUserParams = parse_params(arguments)?;
        match Self::execute(client).await {
            Ok(user) => json_result(&user),
            Err(e) => Ok(error_result(&e.to_string())),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetUserParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<User>()),
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
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_user_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::user()))
            .expect(1)
            .mount(&server)
            .await;

        let user = GetUserTool::execute(&test_client(&server)).await.unwrap();
        assert_eq!(user["id"], "user-123");
        assert_eq!(user["teams"], json!([]));
    }

    #[tokio::test]
    async fn test_get_user_with_teams() {
        let server = MockServer::start().await;
        let mut body = fixtures::user();
        body["teams"] = json!([{
            "id": "team-1",
            "ownerId": "user-123",
            "name": "Docs",
            "logo": "https://example.com/logo.png",
            "path": "docs",
            "description": "Documentation team",
            "visibility": "public",
            "upgraded": true,
            "createdAt": 1700000000000i64
        }]);
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let result = GetUserTool::call(&test_client(&server), None).await.unwrap();
        assert_eq!(result.structured_content, Some(body));
    }

    #[tokio::test]
    async fn test_get_user_failure_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = GetUserTool::execute(&test_client(&server)).await.unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Error fetching user data from HackMD: "));
        assert!(message.contains("401"));
    }

    #[tokio::test]
    async fn test_call_failure_is_error_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = GetUserTool::call(&test_client(&server), None).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => {
                assert!(text.text.starts_with("Error fetching user data from HackMD: "))
            }
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_tool_declares_output_schema() {
        let tool = GetUserTool::to_tool();
        let schema = tool.output_schema.expect("output schema");
        assert!(schema.get("properties").is_some());
    }
}
