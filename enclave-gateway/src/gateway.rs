//! The confidential-compute gateway.
//!
//! Owns the one-time availability probe and the dual-mode dispatcher:
//! every operation is answered by the remote enclave when it was
//! reachable at probe time and the call succeeds, and by the local
//! fallback otherwise. Public operations never return an error; every
//! failure is folded into the flags on the returned record.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, instrument, warn};

use crate::client::EnclaveClient;
use crate::config::GatewayConfig;
use crate::error::GatewayResult;
use crate::fallback;
use crate::types::{
    CompatibilityResult, DecryptionResult, EncryptionResult, GatewayStatus, Subject,
};

/// Provider name reported while the remote enclave is in use.
pub const PROVIDER_REMOTE: &str = "secure enclave";
/// Provider name reported while the local fallback is in use.
pub const PROVIDER_LOCAL: &str = "local fallback";

/// Gateway routing confidential operations to the secure enclave with
/// transparent local fallback.
///
/// Construct one instance per session via [`ConfidentialGateway::connect`]
/// and inject it into callers; tests substitute a stub endpoint through
/// the config.
pub struct ConfidentialGateway {
    client: EnclaveClient,
    // Written once by the probe at construction, read-only afterwards.
    available: AtomicBool,
}

impl ConfidentialGateway {
    /// Build the gateway and probe the enclave once.
    ///
    /// The probe issues a single health check; any error, timeout or
    /// non-success status silently records the enclave as unavailable
    /// for the lifetime of this instance. There is no retry and no
    /// periodic re-check.
    ///
    /// # Errors
    ///
    /// Returns an error only for an invalid configuration; probe
    /// failures never propagate.
    pub async fn connect(config: GatewayConfig) -> GatewayResult<Self> {
        let client = EnclaveClient::new(&config)?;
        let gateway = Self {
            client,
            available: AtomicBool::new(false),
        };
        gateway.probe().await;
        Ok(gateway)
    }

    async fn probe(&self) {
        match self.client.health().await {
            Ok(()) => {
                info!(provider = PROVIDER_REMOTE, "Enclave healthy, remote path enabled");
                self.available.store(true, Ordering::Release);
            }
            Err(error) => {
                warn!(
                    %error,
                    provider = PROVIDER_LOCAL,
                    "Enclave unreachable, operations will use the local path"
                );
            }
        }
    }

    fn remote_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Uniform two-tier dispatch shared by all operations.
    ///
    /// Attempts the remote call when the enclave was reachable at probe
    /// time; on any remote error falls through to the local closure.
    /// The returned flag records which path produced the value.
    async fn dispatch<T>(
        &self,
        operation: &'static str,
        remote: impl Future<Output = GatewayResult<T>>,
        local: impl FnOnce() -> GatewayResult<T>,
    ) -> GatewayResult<(T, bool)> {
        if self.remote_available() {
            match remote.await {
                Ok(value) => {
                    debug!(operation, "Enclave call succeeded");
                    return Ok((value, true));
                }
                Err(error) => {
                    warn!(operation, %error, "Enclave call failed, using local fallback");
                }
            }
        }
        Ok((local()?, false))
    }

    /// Encrypt text, preferring the enclave.
    ///
    /// The local path reversibly encodes the text behind a `local_` tag
    /// and always succeeds; it is an obfuscation placeholder, not
    /// encryption.
    #[instrument(skip(self, text))]
    pub async fn encrypt(&self, text: &str) -> EncryptionResult {
        match self
            .dispatch("encrypt", self.client.encrypt(text), || {
                Ok(fallback::encode(text))
            })
            .await
        {
            Ok((payload, used_remote)) => EncryptionResult {
                payload,
                succeeded: true,
                used_remote,
            },
            // Unreachable today: the local encoder cannot fail.
            Err(_) => EncryptionResult {
                payload: String::new(),
                succeeded: false,
                used_remote: false,
            },
        }
    }

    /// Decrypt a payload, preferring the enclave.
    ///
    /// The local path only understands payloads produced by the local
    /// encoder; anything else yields `succeeded == false` with an empty
    /// payload — the one surfaced failure in the gateway.
    #[instrument(skip(self, payload))]
    pub async fn decrypt(&self, payload: &str) -> DecryptionResult {
        match self
            .dispatch("decrypt", self.client.decrypt(payload), || {
                fallback::decode(payload)
            })
            .await
        {
            Ok((payload, used_remote)) => DecryptionResult {
                payload,
                succeeded: true,
                used_remote,
            },
            Err(error) => {
                debug!(%error, "Local decode failed");
                DecryptionResult {
                    payload: String::new(),
                    succeeded: false,
                    used_remote: false,
                }
            }
        }
    }

    /// Score two subjects, preferring the confidential-compute endpoint.
    ///
    /// The local path always succeeds but draws a random component, so
    /// identical inputs do not reproduce the same score.
    #[instrument(skip(self, a, b))]
    pub async fn compatibility(&self, a: &Subject, b: &Subject) -> CompatibilityResult {
        match self
            .dispatch("compatibility", self.client.compatibility(a, b), || {
                Ok(fallback::compatibility(a, b))
            })
            .await
        {
            Ok(((score, factors), _used_remote)) => CompatibilityResult {
                score,
                succeeded: true,
                factors,
            },
            // Unreachable today: the local scorer cannot fail.
            Err(_) => CompatibilityResult {
                score: 0,
                succeeded: false,
                factors: Vec::new(),
            },
        }
    }

    /// Report gateway status for display.
    ///
    /// The gateway itself is always available — it answers every request
    /// from one path or the other. The provider name records which path
    /// the one-time probe selected and is stable for the session.
    #[must_use]
    pub fn status(&self) -> GatewayStatus {
        let provider = if self.remote_available() {
            PROVIDER_REMOTE
        } else {
            PROVIDER_LOCAL
        };
        GatewayStatus {
            available: true,
            provider: provider.to_string(),
        }
    }
}
