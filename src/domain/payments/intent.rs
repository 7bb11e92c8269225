//! Payment intent domain model.
//!
//! A payment intent captures what the storefront wants to charge before the
//! provider is involved: an amount in the currency's minor unit, a merchant
//! reference, and the customer email Paystack requires.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated request to start a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Amount in kobo/cents (minor currency unit).
    pub amount: i64,

    /// ISO currency code (e.g. "ZAR", "NGN").
    pub currency: String,

    /// Merchant transaction reference, unique per payment.
    pub reference: String,

    /// Customer email address.
    pub email: String,
}

impl PaymentIntent {
    /// Builds a validated intent.
    ///
    /// `currency` falls back to `default_currency` when absent, mirroring
    /// the storefront contract where ZAR is assumed.
    pub fn new(
        amount: i64,
        currency: Option<String>,
        reference: String,
        email: String,
        default_currency: &str,
    ) -> Result<Self, IntentError> {
        if amount <= 0 {
            return Err(IntentError::InvalidAmount(amount));
        }
        if reference.trim().is_empty() {
            return Err(IntentError::MissingReference);
        }
        // Full RFC 5322 validation belongs to the provider; this only
        // catches obviously broken input before the outbound call.
        if !email.contains('@') || email.len() < 3 {
            return Err(IntentError::InvalidEmail(email));
        }

        let currency = currency.unwrap_or_else(|| default_currency.to_string());
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(IntentError::InvalidCurrency(currency));
        }

        Ok(Self {
            amount,
            currency,
            reference,
            email,
        })
    }
}

/// Validation failures for payment intents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(i64),

    #[error("Transaction reference must not be empty")]
    MissingReference,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),
}
