//! Client error types

use serde::Deserialize;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// No session is available for an authenticated call
    #[error("Not authenticated")]
    NotAuthenticated,
}

/// Error bodies returned by the API. Auth endpoints use `error`, the profile
/// endpoint uses `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Create error from a non-success status and the raw response body.
    ///
    /// The server message is taken from the `error` or `message` field of a
    /// JSON body. Any other body, including HTML error pages from proxies,
    /// leaves the message empty.
    pub fn from_response_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                error: Some(error), ..
            }) => error,
            Ok(ErrorBody {
                message: Some(message),
                ..
            }) => message,
            _ => {
                tracing::debug!(%status, "error response without a message");
                String::new()
            }
        };
        Self::from_status(status, message)
    }

    /// Whether the server rejected the bearer token
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_) | Self::Forbidden(_) | Self::NotAuthenticated
        )
    }

    /// Whether the request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// The message the server sent back, if this error carries one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ServerError { message, .. }
            | Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Forbidden(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn extracts_error_field() {
        let err = ClientError::from_response_body(StatusCode::BAD_REQUEST, r#"{"error":"exists"}"#);
        assert!(matches!(err, ClientError::BadRequest(ref m) if m == "exists"));
        assert_eq!(err.server_message(), Some("exists"));
    }

    #[test]
    fn extracts_message_field() {
        let err = ClientError::from_response_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"email taken"}"#,
        );
        assert!(matches!(
            err,
            ClientError::ServerError { status: 422, ref message } if message == "email taken"
        ));
    }

    #[test]
    fn bodies_without_a_message_stay_empty() {
        let err = ClientError::from_response_body(
            StatusCode::BAD_GATEWAY,
            "<html><body>Bad Gateway</body></html>",
        );
        assert_eq!(err.server_message(), Some(""));

        let err = ClientError::from_response_body(StatusCode::NOT_FOUND, "no such route");
        assert!(matches!(err, ClientError::NotFound(ref m) if m.is_empty()));

        let err = ClientError::from_response_body(StatusCode::UNAUTHORIZED, "");
        assert!(err.is_auth_expired());
        assert_eq!(err.server_message(), Some(""));

        let err = ClientError::from_response_body(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert_eq!(err.server_message(), Some(""));
    }

    #[test]
    fn classification() {
        assert!(ClientError::NotAuthenticated.is_auth_expired());
        assert!(!ClientError::BadRequest("x".into()).is_auth_expired());
        assert!(!ClientError::Configuration("x".into()).is_transport());
        assert_eq!(ClientError::NotAuthenticated.server_message(), None);
    }
}
