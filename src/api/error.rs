//! API Error Types
//!
//! Classifies every way a backend call can fail so the view layer can
//! render a single human-readable message.

use thiserror::Error;

/// Errors raised by the API layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request could not be sent, or the response body was unreadable
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was neither JSON nor an HTML document
    #[error("Invalid response from server: {0}")]
    Malformed(String),

    /// Server answered with an HTML page on a 404 status
    #[error("API endpoint not found (404)")]
    EndpointNotFound,

    /// Server answered with an HTML page on a 500 status
    #[error("Internal server error (500)")]
    ServerError,

    /// Server answered with an HTML page on some other status
    #[error("Server returned an error page (status {0})")]
    ErrorPage(u16),

    /// Backend rejected the request with a JSON error body
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// HTTP status carried by the error, when the response got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::EndpointNotFound => Some(404),
            ApiError::ServerError => Some(500),
            ApiError::ErrorPage(status) => Some(*status),
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Malformed(_) => None,
        }
    }

    /// True when the endpoint itself answered 404
    ///
    /// Forgot-password treats a missing reset endpoint as a confirmation
    /// rather than an error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = ApiError::EndpointNotFound;
        assert_eq!(err.to_string(), "API endpoint not found (404)");

        let err = ApiError::ErrorPage(503);
        assert_eq!(err.to_string(), "Server returned an error page (status 503)");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_status() {
        assert_eq!(ApiError::EndpointNotFound.status(), Some(404));
        assert_eq!(ApiError::ServerError.status(), Some(500));
        assert_eq!(ApiError::ErrorPage(418).status(), Some(418));
        assert_eq!(
            ApiError::Rejected {
                status: 422,
                message: "bad".to_string()
            }
            .status(),
            Some(422)
        );
        assert_eq!(ApiError::Network("down".to_string()).status(), None);
        assert_eq!(ApiError::Malformed("gibberish".to_string()).status(), None);
    }

    #[test]
    fn test_is_not_found() {
        assert!(ApiError::EndpointNotFound.is_not_found());
        assert!(ApiError::Rejected {
            status: 404,
            message: "no such route".to_string()
        }
        .is_not_found());
        assert!(!ApiError::ServerError.is_not_found());
        assert!(!ApiError::Network("down".to_string()).is_not_found());
    }
}
