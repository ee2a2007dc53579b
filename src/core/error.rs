//! Crate-wide error type.
//!
//! Everything that can stop the server from starting or serving ends up here.
//! Per-call failures stay inside the tools and never reach this type.

use thiserror::Error;

/// A specialized Result type for server setup and lifecycle.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// A tool call was rejected before reaching the tool.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// An upstream HTTP client could not be built.
    #[error("Upstream error: {0}")]
    Upstream(#[from] super::upstream::UpstreamError),

    /// The transport failed to start or stopped with an error.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
