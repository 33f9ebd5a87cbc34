//! API Error Type
//!
//! Every backend call returns `Result<T, ApiError>`; pages turn the error into
//! a notification string with `to_string()`.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    #[error("Session expired, please log in again")]
    Unauthorized,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Browser API failed: {0}")]
    Browser(String),
    #[error("Invalid token received")]
    InvalidToken,
}

/// Error body shapes produced by the backend
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Build an `Http` error from a non-2xx status and its raw body.
    ///
    /// `{"error": ...}` wins over `{"message": ...}`; a body that is neither
    /// yields a generic status message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = body_message(body).unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::Http { status, message }
    }

    /// A 401 keeps the backend's reason (e.g. bad credentials on login);
    /// without one it reads as an expired session.
    pub fn from_unauthorized(body: &str) -> Self {
        match body_message(body) {
            Some(message) => ApiError::Http { status: 401, message },
            None => ApiError::Unauthorized,
        }
    }
}

fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_preferred() {
        let err = ApiError::from_status(400, r#"{"error":"Invalid ID format","message":"ignored"}"#);
        assert_eq!(err, ApiError::Http { status: 400, message: "Invalid ID format".into() });
        assert_eq!(err.to_string(), "Invalid ID format");
    }

    #[test]
    fn test_message_field_used_when_no_error() {
        let err = ApiError::from_status(500, r#"{"success":false,"message":"Login failed"}"#);
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn test_unparseable_body_gives_status_message() {
        assert_eq!(
            ApiError::from_status(502, "<html>Bad Gateway</html>").to_string(),
            "Request failed with status 502"
        );
        assert_eq!(
            ApiError::from_status(404, r#"{"error":"  "}"#).to_string(),
            "Request failed with status 404"
        );
    }

    #[test]
    fn test_unauthorized_keeps_backend_reason() {
        let err = ApiError::from_unauthorized(r#"{"message":"Login failed","error":"invalid email or password"}"#);
        assert_eq!(err, ApiError::Http { status: 401, message: "invalid email or password".into() });
        assert_eq!(err.to_string(), "invalid email or password");
    }

    #[test]
    fn test_unauthorized_without_body_is_session_expiry() {
        assert_eq!(ApiError::from_unauthorized(""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_unauthorized("Unauthorized"), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_unauthorized("").to_string(),
            "Session expired, please log in again"
        );
    }
}
