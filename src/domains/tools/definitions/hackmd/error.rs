//! HackMD call-site errors.
//!
//! Every upstream call is wrapped where it is made, so the surfaced message
//! says which step failed followed by the original failure.

use thiserror::Error;

use crate::core::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum HackmdError {
    #[error("Error fetching user data from HackMD: {0}")]
    FetchUser(#[source] UpstreamError),

    #[error("Error fetching notes from HackMD: {0}")]
    FetchNotes(#[source] UpstreamError),

    #[error("Error fetching note from HackMD: {0}")]
    FetchNote(#[source] UpstreamError),

    #[error("Error posting note to HackMD: {0}")]
    PostNote(#[source] UpstreamError),

    #[error("Error updating note in HackMD: {0}")]
    UpdateNote(#[source] UpstreamError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> UpstreamError {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err().into()
    }

    #[test]
    fn test_messages_prefix_upstream_failure() {
        let inner = decode_error().to_string();
        assert_eq!(
            HackmdError::UpdateNote(decode_error()).to_string(),
            format!("Error updating note in HackMD: {inner}")
        );
        assert_eq!(
            HackmdError::FetchUser(decode_error()).to_string(),
            format!("Error fetching user data from HackMD: {inner}")
        );
        assert!(
            HackmdError::PostNote(decode_error())
                .to_string()
                .starts_with("Error posting note to HackMD: ")
        );
    }
}
