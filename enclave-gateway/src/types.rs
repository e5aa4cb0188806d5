//! Result records and subject types.
//!
//! Every gateway operation returns a transient, caller-owned record that
//! carries the payload plus two flags: whether the operation produced a
//! usable result and which path (remote enclave or local fallback)
//! produced it. `used_remote == true` always implies the remote call
//! returned a success status.

use serde::{Deserialize, Serialize};

/// Age applied at the boundary when a subject record carries none.
///
/// Callers may pass partial or anonymous records, notably when no
/// profile exists yet.
pub const DEFAULT_AGE: u8 = 25;

/// Result of an encryption operation.
#[derive(Debug, Clone)]
pub struct EncryptionResult {
    /// Ciphertext from the enclave, or the locally encoded payload
    pub payload: String,
    /// Whether a usable payload was produced
    pub succeeded: bool,
    /// Whether the remote enclave produced the payload
    pub used_remote: bool,
}

/// Result of a decryption operation.
#[derive(Debug, Clone)]
pub struct DecryptionResult {
    /// Recovered plaintext; empty when the operation failed
    pub payload: String,
    /// False only when both the remote and local paths failed
    pub succeeded: bool,
    /// Whether the remote enclave produced the payload
    pub used_remote: bool,
}

/// Result of a pairwise compatibility computation.
#[derive(Debug, Clone)]
pub struct CompatibilityResult {
    /// Compatibility score in 0..=100, for display only
    pub score: u8,
    /// Whether a usable score was produced
    pub succeeded: bool,
    /// Ordered labels describing what contributed to the score
    pub factors: Vec<String>,
}

/// A subject record for compatibility scoring.
///
/// An explicit optional-field structure: absent ages default to
/// [`DEFAULT_AGE`] at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Age in years, if the subject has a profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
}

impl Subject {
    /// Create a subject with a known age.
    #[must_use]
    pub const fn with_age(age: u8) -> Self {
        Self { age: Some(age) }
    }

    /// Create an anonymous subject with no profile data.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { age: None }
    }

    /// The subject's age, defaulting to [`DEFAULT_AGE`] when absent.
    #[must_use]
    pub const fn age_or_default(&self) -> u8 {
        match self.age {
            Some(age) => age,
            None => DEFAULT_AGE,
        }
    }
}

/// Status reported to callers, e.g. for a settings-screen badge.
///
/// `available` describes the gateway itself, which always answers from
/// one path or the other; `provider` reflects which path is in use.
/// Callers must not conflate the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayStatus {
    /// Always true: the gateway always returns a usable result
    pub available: bool,
    /// Human-readable name of the active provider
    pub provider: String,
}
