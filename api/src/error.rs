//! Error taxonomy for API calls.
//!
//! The backend reports failures as `{ "data": { "message": "..." } }` (some
//! older endpoints put `message` at the top level). [`extract_message`] pulls
//! the human-readable message out of either shape; callers that surface errors
//! to the user go through [`ApiError::user_message`] so a missing or malformed
//! payload degrades to a caller-supplied fallback instead of raw JSON.

use serde::Deserialize;

/// A failed API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never completed (DNS, connection, timeout).
    #[error("network error: {0}")]
    Transport(String),
    /// The response body could not be decoded into the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a toast. Falls back when the server gave nothing usable.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    data: Option<ErrorBody>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Best-effort extraction of the error message from a failure body.
pub fn extract_message(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    envelope
        .data
        .and_then(|d| d.message)
        .or(envelope.message)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_nested_message() {
        let body = r#"{"data":{"message":"Invite expired"}}"#;
        assert_eq!(extract_message(body), Some("Invite expired".to_string()));
    }

    #[test]
    fn extracts_top_level_message() {
        let body = r#"{"message":"Not found"}"#;
        assert_eq!(extract_message(body), Some("Not found".to_string()));
    }

    #[test]
    fn nested_message_wins_over_top_level() {
        let body = r#"{"data":{"message":"inner"},"message":"outer"}"#;
        assert_eq!(extract_message(body), Some("inner".to_string()));
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert_eq!(extract_message("not json"), None);
        assert_eq!(extract_message(r#"{"data":{}}"#), None);
        assert_eq!(extract_message(r#"{"data":{"message":""}}"#), None);
    }

    #[test]
    fn user_message_falls_back() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("Failed to accept invitation"), "Failed to accept invitation");

        let err = ApiError::Status {
            status: 410,
            message: "Invite expired".to_string(),
        };
        assert_eq!(err.user_message("fallback"), "Invite expired");
    }
}
