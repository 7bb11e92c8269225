//! Paystack payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Paystack REST API.
//! Only the Transaction Initialize call is wired up; webhook verification
//! lives in the domain layer because it is pure computation.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PaystackConfig::new(secret_key);
//! let client = PaystackClient::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::payments::PaymentIntent;
use crate::ports::{PaymentError, PaymentProvider, TransactionAuthorization};

/// Paystack API configuration.
#[derive(Clone)]
pub struct PaystackConfig {
    /// Paystack secret key (sk_live_... or sk_test_...).
    secret_key: SecretString,

    /// Base URL for the Paystack API (default: https://api.paystack.co).
    api_base_url: String,
}

impl PaystackConfig {
    /// Create a new Paystack configuration.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: SecretString::new(secret_key.into()),
            api_base_url: "https://api.paystack.co".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Paystack payment provider adapter.
pub struct PaystackClient {
    config: PaystackConfig,
    http_client: reqwest::Client,
}

impl PaystackClient {
    /// Create a new Paystack client with the given configuration.
    pub fn new(config: PaystackConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentProvider for PaystackClient {
    async fn initialize_transaction(
        &self,
        intent: &PaymentIntent,
    ) -> Result<TransactionAuthorization, PaymentError> {
        let url = format!("{}/transaction/initialize", self.config.api_base_url);

        let request = InitializeRequest {
            // Paystack expects the amount in the minor unit as a string
            amount: intent.amount.to_string(),
            email: intent.email.clone(),
            currency: intent.currency.clone(),
            reference: intent.reference.clone(),
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.config.secret_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PaymentError::authentication(
                "Paystack rejected the secret key",
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "Transaction Initialize failed");
            return Err(PaymentError::provider(format!(
                "Transaction Initialize returned {}",
                status
            )));
        }

        let envelope: ApiEnvelope<InitializeData> = response
            .json()
            .await
            .map_err(|e| PaymentError::invalid_response(e.to_string()))?;

        if !envelope.status {
            return Err(PaymentError::provider(envelope.message));
        }

        let data = envelope
            .data
            .ok_or_else(|| PaymentError::invalid_response("Response envelope missing data"))?;

        Ok(TransactionAuthorization {
            authorization_url: data.authorization_url,
            access_code: data.access_code,
            reference: data.reference,
        })
    }
}

/// Request body for Transaction Initialize.
#[derive(Debug, Serialize)]
struct InitializeRequest {
    amount: String,
    email: String,
    currency: String,
    reference: String,
}

/// Paystack's standard response envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    status: bool,
    message: String,
    data: Option<T>,
}

/// Payload of a successful Transaction Initialize response.
#[derive(Debug, Deserialize)]
struct InitializeData {
    authorization_url: String,
    access_code: String,
    reference: String,
}
