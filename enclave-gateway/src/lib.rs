//! Confidential-Compute Gateway for PriMatch
//!
//! Routes encryption, decryption and compatibility scoring to a remote
//! secure-enclave API when it is reachable, and transparently substitutes
//! local fallback implementations when it is not. The fallback encoder is a
//! reversible obfuscation placeholder, NOT real encryption.

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod gateway;
pub mod identity;
pub mod protocol;
pub mod types;

pub use client::EnclaveClient;
pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use gateway::ConfidentialGateway;
pub use identity::hash_identity;
pub use types::{
    CompatibilityResult, DecryptionResult, EncryptionResult, GatewayStatus, Subject,
};
