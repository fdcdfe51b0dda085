//! Error types for search transitions and outbound catalog calls.
//!
//! The request taxonomy matters to the lifecycle manager: cancellation is
//! expected and never user-visible, everything else surfaces through the
//! session's `error` field and is re-raised to the caller.

use reqwest::StatusCode;
use thiserror::Error;

/// A filter name outside the recognized set. Raised at the transition
/// boundary instead of silently accepting the key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter key: {0}")]
pub struct UnknownFilterKey(pub String);

/// Failure of one outbound search call.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The call was cancelled via its token (superseded by a newer call,
    /// explicit cancel, or session teardown).
    #[error("search request cancelled")]
    Cancelled,

    /// Network-level failure. Displays as the bare transport message,
    /// which is what the session's error field surfaces to the user.
    #[error("{0}")]
    Transport(String),

    /// The catalog answered with a non-success status.
    #[error("{}", status_message(.0))]
    Status(StatusCode),

    /// The response body did not match the expected payload shape.
    #[error("malformed search payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err.to_string())
    }
}

/// User-facing message for the status codes Discogs commonly returns.
fn status_message(status: &StatusCode) -> String {
    match status.as_u16() {
        401 => "Authentication failed. Check your Discogs token.".to_string(),
        403 => "Access denied by the catalog.".to_string(),
        404 => "The catalog endpoint was not found.".to_string(),
        429 => "Rate limited by the catalog. Please wait a moment.".to_string(),
        _ => format!("Catalog request failed with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_displays_bare_message() {
        let err = SearchError::Transport("Network timeout".to_string());
        assert_eq!(err.to_string(), "Network timeout");
    }

    #[test]
    fn status_errors_map_to_user_facing_messages() {
        let err = SearchError::Status(StatusCode::TOO_MANY_REQUESTS);
        assert!(err.to_string().contains("Rate limited"));

        let err = SearchError::Status(StatusCode::IM_A_TEAPOT);
        assert!(err.to_string().contains("418"));
    }

    #[test]
    fn only_cancellation_reports_cancelled() {
        assert!(SearchError::Cancelled.is_cancelled());
        assert!(!SearchError::Transport("boom".to_string()).is_cancelled());
    }
}
