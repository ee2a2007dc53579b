//! Common utilities shared across tools.
//!
//! Argument decoding and result shaping live here so that every tool turns
//! its typed output into the same tool-call result layout.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Decode tool-call arguments into a typed params struct.
///
/// Missing arguments are treated as an empty object so that parameterless
/// tools accept calls without an `arguments` field.
pub fn parse_params<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, ToolError> {
    let arguments = arguments.unwrap_or_default();
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Wrap a tool's output as a call result.
///
/// Objects become structured results (JSON text content plus
/// `structuredContent`); arrays, `null` and scalars become a single JSON text
/// content.
pub fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, ToolError> {
    let value = serde_json::to_value(output).map_err(|e| ToolError::internal(e.to_string()))?;
    if value.is_object() {
        return Ok(CallToolResult::structured(value));
    }
    Ok(CallToolResult::success(vec![Content::text(value.to_string())]))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}
