//! Local fallback implementations.
//!
//! Executed when the enclave is unreachable or a remote call fails. The
//! encoder is reversible base64 obfuscation behind a `local_` tag — a
//! demo placeholder, NOT encryption; it provides no confidentiality.
//! The compatibility score mixes an age-similarity term with a uniform
//! random draw, so identical inputs intentionally do not reproduce the
//! same score.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::Rng;

use crate::error::GatewayError;
use crate::types::Subject;

/// Tag marking a payload as locally encoded.
pub const LOCAL_PREFIX: &str = "local_";

/// Factor labels attached to every locally computed score.
pub const FACTOR_LABELS: [&str; 3] = [
    "age compatibility",
    "shared interests",
    "personality traits",
];

/// Reversibly encode plaintext and tag it as locally produced.
#[must_use]
pub fn encode(text: &str) -> String {
    format!("{LOCAL_PREFIX}{}", STANDARD.encode(text.as_bytes()))
}

/// Reverse [`encode`].
///
/// # Errors
///
/// Returns `GatewayError::MalformedPayload` if the payload lacks the
/// `local_` tag, is not valid base64, or does not decode to UTF-8.
pub fn decode(payload: &str) -> Result<String, GatewayError> {
    let encoded = payload
        .strip_prefix(LOCAL_PREFIX)
        .ok_or(GatewayError::MalformedPayload)?;
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|_| GatewayError::MalformedPayload)?;
    String::from_utf8(bytes).map_err(|_| GatewayError::MalformedPayload)
}

/// Compute a local compatibility score with its factor labels.
///
/// The age term is `max(0, 100 - 3 * |age_a - age_b|)` with absent ages
/// defaulting at the boundary; it is averaged with a random draw in
/// 0..=100 and rounded to the nearest integer. Always in 0..=100.
#[must_use]
pub fn compatibility(a: &Subject, b: &Subject) -> (u8, Vec<String>) {
    let age_gap = a.age_or_default().abs_diff(b.age_or_default());
    let age_score = (100 - i32::from(age_gap) * 3).max(0);

    let random_score: f64 = rand::thread_rng().gen_range(0.0..=100.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = ((f64::from(age_score) + random_score) / 2.0).round() as u8;

    let factors = FACTOR_LABELS.iter().map(ToString::to_string).collect();
    (score, factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_tags_payload() {
        let payload = encode("hello");
        assert!(payload.starts_with(LOCAL_PREFIX));
        assert_ne!(payload, format!("{LOCAL_PREFIX}hello"));
    }

    #[test]
    fn test_round_trip() {
        let plaintext = "Привет! enclave test 💙";
        let decoded = decode(&encode(plaintext)).unwrap();
        assert_eq!(decoded, plaintext);
    }

    #[test]
    fn test_decode_rejects_missing_prefix() {
        let result = decode("aGVsbG8=");
        assert!(matches!(result, Err(GatewayError::MalformedPayload)));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let result = decode("local_not-valid-base64!!!");
        assert!(matches!(result, Err(GatewayError::MalformedPayload)));
    }

    #[test]
    fn test_decode_rejects_non_utf8() {
        // 0xFF 0xFE is not valid UTF-8
        let payload = format!("{LOCAL_PREFIX}{}", STANDARD.encode([0xFF, 0xFE]));
        let result = decode(&payload);
        assert!(matches!(result, Err(GatewayError::MalformedPayload)));
    }

    #[test]
    fn test_compatibility_score_in_range() {
        let pairs = [
            (Subject::with_age(18), Subject::with_age(99)),
            (Subject::with_age(25), Subject::with_age(25)),
            (Subject::anonymous(), Subject::anonymous()),
            (Subject::with_age(0), Subject::with_age(255)),
        ];

        for (a, b) in &pairs {
            let (score, factors) = compatibility(a, b);
            assert!(score <= 100);
            assert_eq!(factors.len(), 3);
        }
    }

    #[test]
    fn test_compatibility_factor_labels() {
        let (_, factors) = compatibility(&Subject::anonymous(), &Subject::anonymous());
        assert_eq!(
            factors,
            vec!["age compatibility", "shared interests", "personality traits"]
        );
    }
}
