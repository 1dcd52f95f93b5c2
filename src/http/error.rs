//! Error classification for remote source requests.

use reqwest::StatusCode;
use thiserror::Error;

/// The single failure kind surfaced by a repository fetch.
///
/// Variants only record where the failure happened; consumers are expected
/// to display the message as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, reset...).
    #[error("Failed to reach the repository API: {0}")]
    Transport(String),

    /// The remote source answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Failed to parse repository list: {0}")]
    Parse(String),
}

impl FetchError {
    /// Human-readable message, suitable for rendering directly.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status code when the failure came from the remote source.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds a status error with a message tailored to the status code.
    ///
    /// `body` is the response text, inspected only to tell GitHub's
    /// rate-limit 403 apart from a plain permission failure.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = match status {
            StatusCode::UNAUTHORIZED => {
                "Authentication failed: invalid or missing token. Check your GITHUB_TOKEN."
                    .to_string()
            }
            StatusCode::FORBIDDEN if body.to_lowercase().contains("rate limit") => {
                rate_limit_message()
            }
            StatusCode::FORBIDDEN => {
                "Access forbidden: you may need authentication.".to_string()
            }
            StatusCode::TOO_MANY_REQUESTS => rate_limit_message(),
            StatusCode::NOT_FOUND => "Not found: no such user on the remote source.".to_string(),
            s => format!("Repository API request failed: HTTP {}", s.as_u16()),
        };

        FetchError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

fn rate_limit_message() -> String {
    "Rate limit exceeded. Try again later or set GITHUB_TOKEN environment variable.".to_string()
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Parse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message() {
        let err = FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.message(), "Repository API request failed: HTTP 500");
    }

    #[test]
    fn test_not_found_message() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND, "");
        assert!(err.message().contains("Not found"));
    }

    #[test]
    fn test_forbidden_rate_limit() {
        let err = FetchError::from_status(
            StatusCode::FORBIDDEN,
            r#"{"message": "API rate limit exceeded for 127.0.0.1."}"#,
        );
        assert!(err.message().contains("Rate limit exceeded"));
        assert!(err.message().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_forbidden_without_rate_limit() {
        let err = FetchError::from_status(StatusCode::FORBIDDEN, "{}");
        assert!(err.message().contains("Access forbidden"));
    }

    #[test]
    fn test_too_many_requests() {
        let err = FetchError::from_status(StatusCode::TOO_MANY_REQUESTS, "");
        assert_eq!(err.status(), Some(429));
        assert!(err.message().contains("Rate limit exceeded"));
    }

    #[test]
    fn test_unauthorized() {
        let err = FetchError::from_status(StatusCode::UNAUTHORIZED, "");
        assert!(err.message().contains("Authentication failed"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: FetchError = serde_json::from_str::<Vec<u32>>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(!err.message().is_empty());
        assert_eq!(err.status(), None);
    }
}
