// File: src/error.rs
use thiserror::Error;

/// Failures of a single catalog API call.
///
/// The `Display` output is what the list screen shows when a fetch fails, so
/// every variant renders as a readable sentence.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Could not set up TLS: {0}")]
    Tls(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_readable() {
        let e = ApiError::Status {
            status: 404,
            message: "Character not found".to_string(),
        };
        assert_eq!(e.to_string(), "Server returned 404: Character not found");
        assert!(e.is_not_found());
    }

    #[test]
    fn test_decode_from_serde() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: ApiError = err.into();
        assert!(e.to_string().starts_with("Unexpected response from server"));
        assert!(!e.is_not_found());
    }
}
