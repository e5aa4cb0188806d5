//! HTTP client for the secure-enclave API.
//!
//! Thin reqwest wrapper: bearer credential on every request, JSON
//! bodies, non-success statuses mapped to [`GatewayError`]. The
//! configured timeout bounds every call, the health probe included.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::protocol::{
    CompatibilityRequest, CompatibilityResponse, DecryptRequest, DecryptResponse, EncryptRequest,
    EncryptResponse,
};
use crate::types::Subject;

/// Client for the remote secure-enclave endpoints.
pub struct EnclaveClient {
    http: Client,
    endpoint: Url,
    credential: SecretString,
}

impl EnclaveClient {
    /// Create a new enclave client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .use_rustls_tls()
            .build()
            .map_err(GatewayError::Http)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            credential: config.credential.clone(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint.as_str().trim_end_matches('/'))
    }

    /// Probe the enclave health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport failure, timeout or
    /// non-success status.
    pub async fn health(&self) -> GatewayResult<()> {
        let response = self
            .http
            .get(self.url_for("health"))
            .bearer_auth(self.credential.expose_secret())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Status {
                code: status.as_u16(),
            })
        }
    }

    /// Encrypt plaintext inside the enclave.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport failure or non-success status.
    pub async fn encrypt(&self, text: &str) -> GatewayResult<String> {
        let response: EncryptResponse = self
            .post("enclave/encrypt", &EncryptRequest { data: text })
            .await?;
        Ok(response.encrypted)
    }

    /// Decrypt ciphertext inside the enclave.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport failure or non-success status.
    pub async fn decrypt(&self, payload: &str) -> GatewayResult<String> {
        let response: DecryptResponse = self
            .post(
                "enclave/decrypt",
                &DecryptRequest {
                    encrypted_data: payload,
                },
            )
            .await?;
        Ok(response.decrypted)
    }

    /// Score two subjects inside the confidential-compute endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport failure or non-success status.
    pub async fn compatibility(
        &self,
        a: &Subject,
        b: &Subject,
    ) -> GatewayResult<(u8, Vec<String>)> {
        let response: CompatibilityResponse = self
            .post(
                "confidential-compute/compatibility",
                &CompatibilityRequest {
                    user1_data: a,
                    user2_data: b,
                },
            )
            .await?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = response.compatibility_score.round().clamp(0.0, 100.0) as u8;
        Ok((score, response.factors))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> GatewayResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        debug!(path, "Calling enclave endpoint");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.credential.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                code: status.as_u16(),
            });
        }

        response.json().await.map_err(GatewayError::from)
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() || e.is_connect() {
        GatewayError::unavailable(e.to_string())
    } else {
        GatewayError::Http(e)
    }
}
