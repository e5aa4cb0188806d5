//! Wire types for the secure-enclave API.
//!
//! Field names follow the enclave protocol exactly; the compatibility
//! bodies use camelCase keys.

use serde::{Deserialize, Serialize};

use crate::types::Subject;

/// Body of `POST /enclave/encrypt`.
#[derive(Debug, Serialize)]
pub struct EncryptRequest<'a> {
    /// Plaintext to encrypt inside the enclave
    pub data: &'a str,
}

/// Response of `POST /enclave/encrypt`.
#[derive(Debug, Deserialize)]
pub struct EncryptResponse {
    /// Ciphertext produced by the enclave
    pub encrypted: String,
}

/// Body of `POST /enclave/decrypt`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest<'a> {
    /// Ciphertext to decrypt inside the enclave
    pub encrypted_data: &'a str,
}

/// Response of `POST /enclave/decrypt`.
#[derive(Debug, Deserialize)]
pub struct DecryptResponse {
    /// Recovered plaintext
    pub decrypted: String,
}

/// Body of `POST /confidential-compute/compatibility`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest<'a> {
    /// First subject record
    pub user1_data: &'a Subject,
    /// Second subject record
    pub user2_data: &'a Subject,
}

/// Response of `POST /confidential-compute/compatibility`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    /// Score computed by the enclave
    pub compatibility_score: f64,
    /// Contributing factor labels; the enclave may omit them
    #[serde(default)]
    pub factors: Vec<String>,
}
