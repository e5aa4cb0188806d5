//! Gateway error types using thiserror 2.0.
//!
//! These errors circulate between the enclave client and the dispatcher.
//! Public gateway operations never return them: every remote failure is
//! absorbed into the flags on the per-call result records, and only a
//! malformed local payload surfaces to callers (via `succeeded == false`).

use thiserror::Error;

/// Gateway-internal errors.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Enclave endpoint unreachable (connect failure or timeout)
    #[error("Enclave unavailable: {0}")]
    Unavailable(String),

    /// Enclave returned a non-success status
    #[error("Enclave returned status {code}")]
    Status {
        /// The HTTP status code returned by the endpoint
        code: u16,
    },

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Payload was not produced by the local fallback encoder
    #[error("Payload was not produced by the local encoder")]
    MalformedPayload,
}

/// Result type for gateway-internal operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Check if this error came from the remote path.
    ///
    /// Remote failures are absorbed by the dispatcher and answered from
    /// the local fallback; only non-remote errors can reach a caller.
    #[must_use]
    pub const fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            Self::Unavailable(_) | Self::Status { .. } | Self::Http(_) | Self::Serialization(_)
        )
    }

    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::unavailable("connection refused");
        assert_eq!(err.to_string(), "Enclave unavailable: connection refused");

        let err = GatewayError::Status { code: 503 };
        assert_eq!(err.to_string(), "Enclave returned status 503");
    }

    #[test]
    fn test_remote_failure_classification() {
        assert!(GatewayError::Unavailable("timeout".to_string()).is_remote_failure());
        assert!(GatewayError::Status { code: 500 }.is_remote_failure());
        assert!(!GatewayError::MalformedPayload.is_remote_failure());
        assert!(!GatewayError::invalid_config("bad scheme").is_remote_failure());
    }
}
