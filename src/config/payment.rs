//! Payment configuration (Paystack)

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Paystack)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Paystack secret key (sk_test_... or sk_live_...).
    ///
    /// Paystack signs webhook payloads with this same key, so it doubles
    /// as the webhook verification secret.
    #[serde(default)]
    pub paystack_secret_key: String,

    /// Default currency for payment intents
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Base URL for the Paystack API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl PaymentConfig {
    /// Check if using Paystack test mode
    pub fn is_test_mode(&self) -> bool {
        self.paystack_secret_key.starts_with("sk_test_")
    }

    /// Check if using Paystack live mode
    pub fn is_live_mode(&self) -> bool {
        self.paystack_secret_key.starts_with("sk_live_")
    }

    /// Validate payment configuration
    ///
    /// An absent secret key is a configuration fault caught at startup,
    /// never discovered mid-request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.paystack_secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("PAYSTACK_SECRET_KEY"));
        }
        if !self.paystack_secret_key.starts_with("sk_") {
            return Err(ValidationError::InvalidPaystackKey);
        }
        if self.default_currency.len() != 3
            || !self.default_currency.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            paystack_secret_key: String::new(),
            default_currency: default_currency(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_currency() -> String {
    "ZAR".to_string()
}

fn default_api_base_url() -> String {
    "https://api.paystack.co".to_string()
}
