// ABOUTME: Error types for notehub-client
// ABOUTME: Splits transport failures from non-2xx responses and decode failures

use thiserror::Error;

/// Errors that can occur in notes API operations
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    #[error("note not found: {0}")]
    NotFound(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// True when the failure is an authentication rejection. The view
    /// layer appends a token-configuration hint on top of these.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Request { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            // Connect failures, timeouts, and builder errors: no response
            // was received, so there is no status to report.
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_network() {
        let err = ApiError::Network("connection refused".to_string());
        let display = format!("{}", err);
        assert!(display.contains("network error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_api_error_display_request() {
        let err = ApiError::Request {
            status: 500,
            body: "internal".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("500"));
        assert!(display.contains("internal"));
    }

    #[test]
    fn test_api_error_display_not_found() {
        let err = ApiError::NotFound("note-42".to_string());
        let display = format!("{}", err);
        assert!(display.contains("not found"));
        assert!(display.contains("note-42"));
    }

    #[test]
    fn test_api_error_display_invalid_response() {
        let err = ApiError::InvalidResponse("malformed JSON".to_string());
        let display = format!("{}", err);
        assert!(display.contains("invalid response"));
        assert!(display.contains("malformed JSON"));
    }

    #[test]
    fn test_is_auth_failure_on_401() {
        let err = ApiError::Request {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert!(err.is_auth_failure());
    }

    #[test]
    fn test_is_auth_failure_other_statuses() {
        let forbidden = ApiError::Request {
            status: 403,
            body: String::new(),
        };
        assert!(!forbidden.is_auth_failure());
        assert!(!ApiError::Network("down".to_string()).is_auth_failure());
        assert!(!ApiError::NotFound("id".to_string()).is_auth_failure());
    }

    #[test]
    fn test_api_error_debug() {
        let err = ApiError::Network("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Network"));
        assert!(debug_str.contains("test"));
    }
}
