//! News & Notes MCP Server Library
//!
//! A Model Context Protocol server exposing two upstream HTTP APIs as typed
//! tools:
//!
//! - **Hacker News**: `get_top_stories`, `get_story`
//! - **HackMD**: `get_user`, `list_notes`, `get_note`, `post_note`, `update_note`
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the upstream HTTP client, the rmcp
//!   server handler and the transports
//! - **domains::tools**: tool definitions, the registry and the rmcp router
//!
//! # Example
//!
//! ```rust,no_run
//! use news_notes_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
