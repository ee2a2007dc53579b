//! Tool definitions module.
//!
//! One sub-module per upstream service, one file per tool.

pub mod common;
pub mod hackmd;
pub mod hn;

pub use hackmd::{
    GetNoteTool, GetUserTool, HackmdClient, ListNotesTool, PostNoteTool, UpdateNoteTool,
};
pub use hn::{GetStoryTool, GetTopStoriesTool, HnClient};
