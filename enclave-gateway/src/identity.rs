//! Stateless identity hashing.

use sha2::{Digest, Sha256};

/// Hash an identity value (e.g. an email) for uniqueness checks.
///
/// Lower-cases the input, computes SHA-256 and renders lowercase hex.
/// Deterministic and case-insensitive; always computed locally. Suitable
/// for deduplication only — collision resistance, not confidentiality.
#[must_use]
pub fn hash_identity(value: &str) -> String {
    let digest = Sha256::digest(value.to_lowercase().as_bytes());
    hex::encode(digest)
}
