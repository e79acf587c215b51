/*
[INPUT]:  Error sources (HTTP transport, status codes, API error bodies, serialization)
[OUTPUT]: Structured error types with transport/data-shape classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the VK adapter
#[derive(Error, Debug)]
pub enum VkError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {code}: {message}")]
    Status { code: u16, message: String },

    /// API returned an `error` object instead of a payload
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// No access token installed on the client
    #[error("Access token is not set")]
    MissingCredentials,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response decoded but lacks an expected field
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client construction failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request exceeded its timeout
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },
}

impl VkError {
    /// Network failure, timeout or non-success HTTP status
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            VkError::Http(_) | VkError::Status { .. } | VkError::Timeout { .. }
        )
    }

    /// Body did not have the shape the endpoint promises
    pub fn is_data_shape(&self) -> bool {
        matches!(
            self,
            VkError::Api { .. } | VkError::Serialization(_) | VkError::InvalidResponse(_)
        )
    }

    /// Check if error comes from client setup rather than a request
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            VkError::MissingCredentials | VkError::Config(_) | VkError::UrlParse(_)
        )
    }

    /// Create a status error from a status code and response body
    pub fn status_error(status: StatusCode, message: impl Into<String>) -> Self {
        VkError::Status {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for VK operations
pub type Result<T> = std::result::Result<T, VkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let timeout_err = VkError::Timeout { duration: 3 };
        assert!(timeout_err.is_transport());
        assert!(!timeout_err.is_data_shape());

        let shape_err = VkError::InvalidResponse("missing response.stats".to_string());
        assert!(shape_err.is_data_shape());
        assert!(!shape_err.is_transport());

        assert!(VkError::MissingCredentials.is_config_error());
        assert!(!VkError::MissingCredentials.is_transport());
    }

    #[test]
    fn test_api_error_is_data_shape() {
        let err = VkError::Api {
            code: 100,
            message: "One of the parameters specified was missing or invalid".to_string(),
        };
        assert!(err.is_data_shape());
        assert_eq!(
            err.to_string(),
            "API error (code 100): One of the parameters specified was missing or invalid"
        );
    }

    #[test]
    fn test_status_error_creation() {
        let err = VkError::status_error(StatusCode::BAD_GATEWAY, "upstream down");
        match err {
            VkError::Status { code, message } => {
                assert_eq!(code, 502);
                assert_eq!(message, "upstream down");
            }
            _ => panic!("Expected Status error variant"),
        }
    }
}
