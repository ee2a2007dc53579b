//! Tool-specific error types.
//!
//! These are protocol-level failures: the call never reached a tool, or the
//! tool could not encode its output. Upstream failures are not represented
//! here; each tool group reports them in its own way.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors raised before or after a tool runs.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No enabled tool has this name.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Arguments did not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool output could not be encoded.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        match err {
            ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
                McpError::invalid_params(message, None)
            }
            ToolError::Internal(_) => McpError::internal_error(message, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_invalid_arguments_maps_to_invalid_params() {
        let err: McpError = ToolError::invalid_arguments("missing field `id`").into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("missing field `id`"));
    }

    #[test]
    fn test_not_found_maps_to_invalid_params() {
        let err: McpError = ToolError::not_found("get_weather").into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Tool not found: get_weather");
    }

    #[test]
    fn test_internal_maps_to_internal_error() {
        let err: McpError = ToolError::internal("boom").into();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
