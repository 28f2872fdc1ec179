//! Maps-domain error types.

use thiserror::Error;

/// A specialized Result type for Google Maps operations.
pub type MapsResult<T> = std::result::Result<T, MapsError>;

/// Errors that can occur while talking to the Google Maps Web Services.
#[derive(Debug, Error)]
pub enum MapsError {
    /// Client-supplied input failed validation before any provider call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The provider answered but had nothing for the request
    /// (no geocode match, no route, no address for a coordinate).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The provider reported a non-OK status for the call.
    #[error("Provider returned status {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Provider {
        status: String,
        detail: Option<String>,
    },

    /// Transport-level failure reaching the provider.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider response could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A tool was invoked before the adapter was constructed.
    #[error("Google Maps client not initialized")]
    NotInitialized,
}

impl MapsError {
    /// Create a new "invalid input" error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new provider-status error.
    pub fn provider(status: impl Into<String>, detail: Option<String>) -> Self {
        Self::Provider {
            status: status.into(),
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display_with_detail() {
        let err = MapsError::provider("REQUEST_DENIED", Some("bad key".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("REQUEST_DENIED"));
        assert!(msg.contains("bad key"));
    }

    #[test]
    fn test_provider_error_display_without_detail() {
        let err = MapsError::provider("UNKNOWN_ERROR", None);
        assert_eq!(err.to_string(), "Provider returned status UNKNOWN_ERROR");
    }

    #[test]
    fn test_not_initialized_message() {
        assert_eq!(
            MapsError::NotInitialized.to_string(),
            "Google Maps client not initialized"
        );
    }
}
