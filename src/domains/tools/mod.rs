//! Tools domain module.
//!
//! Tools are the only capability this server exposes. Each upstream service
//! contributes a group of tools:
//!
//! - `definitions/hn` - Hacker News stories (read-only, failures degrade)
//! - `definitions/hackmd` - HackMD user and notes (failures are reported)
//!
//! ## Layout
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter builder for the rmcp-driven transports
//! - `registry.rs` - enabled services, tool metadata and direct dispatch
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
