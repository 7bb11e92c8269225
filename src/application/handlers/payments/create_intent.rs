//! CreateIntentHandler - Command handler for starting a payment.

use std::sync::Arc;

use crate::domain::payments::{IntentError, PaymentIntent};
use crate::ports::{PaymentError, PaymentProvider, TransactionAuthorization};

/// Command to create a payment intent.
#[derive(Debug, Clone)]
pub struct CreateIntentCommand {
    /// Amount in the currency's minor unit (kobo/cents).
    pub amount: i64,
    /// Currency code; falls back to the configured default when absent.
    pub currency: Option<String>,
    /// Merchant transaction reference.
    pub reference: String,
    /// Customer email.
    pub email: String,
}

/// Result of creating a payment intent.
#[derive(Debug, Clone)]
pub struct IntentCreated {
    /// The validated intent as sent to the provider.
    pub intent: PaymentIntent,
    /// Authorization returned by Transaction Initialize.
    pub authorization: TransactionAuthorization,
}

/// Errors from intent creation.
#[derive(Debug, thiserror::Error)]
pub enum CreateIntentError {
    #[error(transparent)]
    Validation(#[from] IntentError),

    #[error(transparent)]
    Provider(#[from] PaymentError),
}

/// Handler for creating payment intents.
///
/// Validates input, then asks the payment provider to initialize the
/// transaction.
pub struct CreateIntentHandler {
    payment_provider: Arc<dyn PaymentProvider>,
    default_currency: String,
}

impl CreateIntentHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>, default_currency: String) -> Self {
        Self {
            payment_provider,
            default_currency,
        }
    }

    /// Execute the command.
    pub async fn handle(&self, cmd: CreateIntentCommand) -> Result<IntentCreated, CreateIntentError> {
        let intent = PaymentIntent::new(
            cmd.amount,
            cmd.currency,
            cmd.reference,
            cmd.email,
            &self.default_currency,
        )?;

        tracing::debug!(
            reference = %intent.reference,
            amount = intent.amount,
            currency = %intent.currency,
            "Initializing transaction"
        );

        let authorization = self.payment_provider.initialize_transaction(&intent).await?;

        Ok(IntentCreated {
            intent,
            authorization,
        })
    }
}
