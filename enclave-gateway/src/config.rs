//! Gateway configuration.
//!
//! Type-safe configuration for the enclave client with validation.
//! Immutable after construction; the credential is held in a
//! [`SecretString`] so it never appears in debug output.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::GatewayError;

/// Default upper bound on any remote call, probe included.
///
/// The enclave protocol specifies no timeout, but a hung endpoint must
/// degrade to the local fallback instead of stalling the caller.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the confidential-compute gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the secure-enclave API
    pub endpoint: Url,
    /// Opaque bearer credential sent with every request
    pub credential: SecretString,
    /// Request timeout for the probe and all remote operations
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Create a new configuration with the default timeout.
    #[must_use]
    pub fn new(endpoint: Url, credential: impl Into<String>) -> Self {
        Self {
            endpoint,
            credential: SecretString::from(credential.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the remote-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidConfig` if:
    /// - Endpoint scheme is not http or https
    /// - Timeout is zero
    pub fn validate(&self) -> Result<(), GatewayError> {
        let scheme = self.endpoint.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(GatewayError::invalid_config(format!(
                "Invalid endpoint scheme '{scheme}': must be http or https"
            )));
        }

        if self.timeout.is_zero() {
            return Err(GatewayError::invalid_config(
                "Timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("https://enclave.example.com/v1").unwrap()
    }

    #[test]
    fn test_default_timeout() {
        let config = GatewayConfig::new(endpoint(), "test-credential");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_scheme_rejected() {
        let config = GatewayConfig::new(Url::parse("ftp://enclave.example.com").unwrap(), "creds");
        let result = config.validate();
        assert!(matches!(result, Err(GatewayError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = GatewayConfig::new(endpoint(), "creds").with_timeout(Duration::ZERO);
        let result = config.validate();
        assert!(matches!(result, Err(GatewayError::InvalidConfig(_))));
    }

    #[test]
    fn test_credential_not_exposed_in_debug() {
        let config = GatewayConfig::new(endpoint(), "super-secret-token");
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("super-secret-token"));
    }
}
