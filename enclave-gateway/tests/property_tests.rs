//! Property-based tests for the gateway's pure components.
//!
//! Covers the local fallback codec, the local compatibility scorer and
//! the identity hasher. The remote path is covered by the wiremock
//! integration tests.

use enclave_gateway::fallback;
use enclave_gateway::hash_identity;
use enclave_gateway::types::Subject;
use proptest::prelude::*;

fn subject_strategy() -> impl Strategy<Value = Subject> {
    prop::option::of(any::<u8>()).prop_map(|age| Subject { age })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Round-trip law: for all text, decoding the locally encoded
    /// payload recovers the original.
    #[test]
    fn prop_fallback_round_trip(text in "\\PC*") {
        let payload = fallback::encode(&text);
        prop_assert_eq!(fallback::decode(&payload).unwrap(), text);
    }

    /// Every locally encoded payload carries the local tag.
    #[test]
    fn prop_encoded_payload_is_tagged(text in "\\PC*") {
        prop_assert!(fallback::encode(&text).starts_with(fallback::LOCAL_PREFIX));
    }

    /// Untagged input is rejected as malformed.
    #[test]
    fn prop_decode_rejects_untagged_input(payload in "\\PC*") {
        prop_assume!(!payload.starts_with(fallback::LOCAL_PREFIX));
        prop_assert!(fallback::decode(&payload).is_err());
    }

    /// The local score is always in 0..=100 with the fixed three
    /// factor labels, for any ages including absent ones. Equality
    /// across calls is deliberately not asserted: the score draws a
    /// random component.
    #[test]
    fn prop_local_score_in_range(a in subject_strategy(), b in subject_strategy()) {
        let (score, factors) = fallback::compatibility(&a, &b);
        prop_assert!(score <= 100);
        prop_assert_eq!(factors.len(), 3);
    }

    /// The identity hash is deterministic, case-insensitive and
    /// rendered as 64 lowercase hex characters.
    #[test]
    fn prop_identity_hash_shape(value in "[a-zA-Z0-9@._-]{1,40}") {
        let hash = hash_identity(&value);
        prop_assert_eq!(hash.len(), 64);
        prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        prop_assert_eq!(&hash, &hash_identity(&value.to_lowercase()));
        prop_assert_eq!(&hash, &hash_identity(&value.to_uppercase()));
    }
}
