//! HackMD tools module.
//!
//! - `user`: profile behind the configured token
//! - `list_notes` / `get_note`: read notes
//! - `post_note` / `update_note`: write notes
//!
//! Unlike the Hacker News tools, failures here are reported to the caller as
//! error results carrying a per-operation message prefix.

pub mod client;
pub mod error;
pub mod get_note;
pub mod list_notes;
pub mod post_note;
pub mod types;
pub mod update_note;
pub mod user;

pub use client::HackmdClient;
pub use error::HackmdError;
pub use get_note::{GetNoteParams, GetNoteTool};
pub use list_notes::{ListNotesParams, ListNotesTool};
pub use post_note::{PostNoteParams, PostNoteTool};
pub use types::{Note, NoteCore, NoteList, User};
pub use update_note::{UpdateNoteParams, UpdateNoteTool};
pub use user::{GetUserParams, GetUserTool};
