//! Paystack webhook event model.
//!
//! Paystack delivers events as a JSON envelope with an `event` type string
//! and a provider-specific `data` object. The envelope is only parsed after
//! the raw payload has passed signature verification.

use serde::{Deserialize, Serialize};

/// A verified webhook event from Paystack.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaystackEvent {
    /// Event type (e.g., "charge.success").
    pub event: String,

    /// Event payload. Shape varies per event type, so the raw JSON is kept
    /// and typed views are extracted on demand.
    pub data: serde_json::Value,
}

/// Event types the order-update flow cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaystackEventType {
    /// A charge completed successfully.
    ChargeSuccess,
    /// A charge failed.
    ChargeFailed,
    /// Any other event type, preserved verbatim.
    Other(String),
}

impl PaystackEvent {
    /// Classify the event type string.
    pub fn event_type(&self) -> PaystackEventType {
        match self.event.as_str() {
            "charge.success" => PaystackEventType::ChargeSuccess,
            "charge.failed" => PaystackEventType::ChargeFailed,
            other => PaystackEventType::Other(other.to_string()),
        }
    }

    /// Extract the typed charge payload, if this is a charge event.
    pub fn charge_data(&self) -> Option<ChargeData> {
        serde_json::from_value(self.data.clone()).ok()
    }

    /// The transaction reference carried by the event, if any.
    pub fn reference(&self) -> Option<&str> {
        self.data.get("reference").and_then(|v| v.as_str())
    }
}

/// Typed view of the `data` object for charge events.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChargeData {
    /// Merchant transaction reference.
    pub reference: String,

    /// Amount in the currency's minor unit (kobo/cents).
    #[serde(default)]
    pub amount: Option<i64>,

    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,

    /// Customer email, when Paystack includes it.
    #[serde(default)]
    pub email: Option<String>,
}
