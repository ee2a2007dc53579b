//! Hacker News tools module.
//!
//! - `top_stories`: ids of the current top stories
//! - `story`: a single story by id
//!
//! Upstream failures here never surface as errors: the tools degrade to an
//! empty list or `null` and log a warning.

pub mod client;
pub mod story;
pub mod top_stories;
pub mod types;

pub use client::HnClient;
pub use story::{GetStoryParams, GetStoryTool};
pub use top_stories::{GetTopStoriesParams, GetTopStoriesTool};
pub use types::Story;
