//! ProcessWebhookHandler - Command handler for inbound Paystack webhooks.
//!
//! Verifies the signature over the raw payload, parses the event, and hands
//! it to the order store. Verification failures are terminal for the
//! request; nothing is retried here.

use std::sync::Arc;

use crate::domain::webhook::{PaystackEvent, PaystackWebhookVerifier, WebhookError};
use crate::ports::{OrderError, OrderStore, OrderUpdate};

/// Command to process a webhook delivery.
#[derive(Debug, Clone)]
pub struct ProcessWebhookCommand {
    /// Raw request body, exactly as received over the wire.
    pub payload: Vec<u8>,
    /// Claimed signature from the `x-paystack-signature` header, if present.
    pub signature: Option<String>,
}

/// Result of processing a webhook.
#[derive(Debug, Clone)]
pub enum ProcessWebhookResult {
    /// Event verified and applied to an order.
    Applied {
        event: PaystackEvent,
        update: OrderUpdate,
    },
    /// Event verified but carried no actionable order change.
    Acknowledged { event: PaystackEvent },
}

/// Errors from webhook processing.
#[derive(Debug, thiserror::Error)]
pub enum ProcessWebhookError {
    #[error(transparent)]
    Verification(#[from] WebhookError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Handler for processing Paystack webhooks.
pub struct ProcessWebhookHandler {
    verifier: Arc<PaystackWebhookVerifier>,
    order_store: Arc<dyn OrderStore>,
}

impl ProcessWebhookHandler {
    pub fn new(verifier: Arc<PaystackWebhookVerifier>, order_store: Arc<dyn OrderStore>) -> Self {
        Self {
            verifier,
            order_store,
        }
    }

    /// Execute the command.
    pub async fn handle(
        &self,
        cmd: ProcessWebhookCommand,
    ) -> Result<ProcessWebhookResult, ProcessWebhookError> {
        let event = match self
            .verifier
            .verify_and_parse(&cmd.payload, cmd.signature.as_deref())
        {
            Ok(event) => event,
            Err(err) => {
                match &err {
                    // A missing secret is a broken deployment, not an attack
                    WebhookError::MissingSecret => {
                        tracing::error!("Webhook secret not configured; rejecting delivery");
                    }
                    WebhookError::SignatureMismatch => {
                        tracing::warn!(
                            payload_len = cmd.payload.len(),
                            "Webhook signature mismatch - possible forgery attempt"
                        );
                    }
                    other => {
                        tracing::debug!(error = %other, "Webhook rejected");
                    }
                }
                return Err(err.into());
            }
        };

        tracing::info!(event = %event.event, reference = ?event.reference(), "Webhook verified");

        match self.order_store.apply_event(&event).await? {
            OrderUpdate::Ignored => Ok(ProcessWebhookResult::Acknowledged { event }),
            update => Ok(ProcessWebhookResult::Applied { event, update }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::webhook::compute_test_signature;
    use crate::ports::OrderStatus;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const TEST_SECRET: &str = "whsec_test";

    struct RecordingOrderStore {
        applied: Mutex<Vec<String>>,
    }

    impl RecordingOrderStore {
        fn new() -> Self {
            Self {
                applied: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OrderStore for RecordingOrderStore {
        async fn apply_event(&self, event: &PaystackEvent) -> Result<OrderUpdate, OrderError> {
            let reference = event
                .reference()
                .ok_or(OrderError::MissingField("reference"))?
                .to_string();
            self.applied.lock().unwrap().push(reference.clone());
            Ok(OrderUpdate::StatusChanged {
                reference,
                status: OrderStatus::Paid,
            })
        }
    }

    fn handler_with(store: Arc<dyn OrderStore>) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(Arc::new(PaystackWebhookVerifier::new(TEST_SECRET)), store)
    }

    fn signed_command(payload: &[u8]) -> ProcessWebhookCommand {
        ProcessWebhookCommand {
            payload: payload.to_vec(),
            signature: Some(compute_test_signature(TEST_SECRET, payload)),
        }
    }

    #[tokio::test]
    async fn applies_verified_charge_event() {
        let store = Arc::new(RecordingOrderStore::new());
        let handler = handler_with(store.clone());
        let payload = br#"{"event":"charge.success","data":{"reference":"abc123"}}"#;

        let result = handler.handle(signed_command(payload)).await.unwrap();

        assert!(matches!(result, ProcessWebhookResult::Applied { .. }));
        assert_eq!(*store.applied.lock().unwrap(), vec!["abc123".to_string()]);
    }

    #[tokio::test]
    async fn rejects_forged_signature_without_touching_store() {
        let store = Arc::new(RecordingOrderStore::new());
        let handler = handler_with(store.clone());
        let payload = br#"{"event":"charge.success","data":{"reference":"abc123"}}"#;

        let result = handler
            .handle(ProcessWebhookCommand {
                payload: payload.to_vec(),
                signature: Some("deadbeef".to_string()),
            })
            .await;

        assert!(matches!(
            result,
            Err(ProcessWebhookError::Verification(
                WebhookError::SignatureMismatch
            ))
        ));
        assert!(store.applied.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_missing_signature() {
        let handler = handler_with(Arc::new(RecordingOrderStore::new()));

        let result = handler
            .handle(ProcessWebhookCommand {
                payload: b"{}".to_vec(),
                signature: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(ProcessWebhookError::Verification(
                WebhookError::MissingSignature
            ))
        ));
    }

    #[tokio::test]
    async fn surfaces_order_store_errors() {
        let handler = handler_with(Arc::new(RecordingOrderStore::new()));
        // Valid signature, but the payload has no reference for the store
        let payload = br#"{"event":"charge.success","data":{}}"#;

        let result = handler.handle(signed_command(payload)).await;

        assert!(matches!(
            result,
            Err(ProcessWebhookError::Order(OrderError::MissingField(
                "reference"
            )))
        ));
    }
}
