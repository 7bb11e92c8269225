//! Mock payment provider for tests and local development.

use async_trait::async_trait;

use crate::domain::payments::PaymentIntent;
use crate::ports::{PaymentError, PaymentProvider, TransactionAuthorization};

/// Payment provider that returns canned authorizations without network I/O.
#[derive(Default)]
pub struct MockPaymentProvider {
    /// When set, every call fails with this error.
    failure: Option<PaymentError>,
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with the given error.
    pub fn failing_with(error: PaymentError) -> Self {
        Self {
            failure: Some(error),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn initialize_transaction(
        &self,
        intent: &PaymentIntent,
    ) -> Result<TransactionAuthorization, PaymentError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        Ok(TransactionAuthorization {
            authorization_url: format!(
                "https://checkout.paystack.com/mock/{}",
                intent.reference
            ),
            access_code: format!("mock_{}", intent.reference),
            reference: intent.reference.clone(),
        })
    }
}
