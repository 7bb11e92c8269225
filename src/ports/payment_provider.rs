//! Payment provider port for external payment processing.
//!
//! Defines the contract for the payment gateway integration (Paystack).
//! The payments service only needs one operation today: the Transaction
//! Initialize call that turns a validated intent into a checkout
//! authorization the customer can complete.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::payments::PaymentIntent;

/// Port for the payment provider integration.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Initialize a transaction with the provider.
    ///
    /// Returns the authorization details the customer uses to complete
    /// payment.
    async fn initialize_transaction(
        &self,
        intent: &PaymentIntent,
    ) -> Result<TransactionAuthorization, PaymentError>;
}

/// Authorization returned by the provider's Transaction Initialize API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionAuthorization {
    /// URL the customer visits to complete payment.
    pub authorization_url: String,

    /// Provider access code for the transaction.
    pub access_code: String,

    /// Merchant reference echoed back by the provider.
    pub reference: String,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: code.is_retryable(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error (provider rejected our credentials).
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Create a provider-side error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }

    /// Create an invalid-response error (unexpected payload shape).
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidResponse, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,

    /// Provider returned an unexpected payload.
    InvalidResponse,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError | PaymentErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
            PaymentErrorCode::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
