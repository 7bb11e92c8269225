//! In-memory order store.
//!
//! Keeps order payment status in a process-local map keyed by transaction
//! reference. Suitable for tests and local development; a persistent
//! implementation would live behind the same port.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::webhook::{PaystackEvent, PaystackEventType};
use crate::ports::{OrderError, OrderStatus, OrderStore, OrderUpdate};

/// Order store backed by an in-memory map.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<HashMap<String, OrderStatus>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a pending order, as checkout would before redirecting to Paystack.
    pub fn insert_pending(&self, reference: impl Into<String>) {
        self.orders
            .lock()
            .expect("order map lock poisoned")
            .insert(reference.into(), OrderStatus::Pending);
    }

    /// Look up the current status of an order.
    pub fn status(&self, reference: &str) -> Option<OrderStatus> {
        self.orders
            .lock()
            .expect("order map lock poisoned")
            .get(reference)
            .copied()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn apply_event(&self, event: &PaystackEvent) -> Result<OrderUpdate, OrderError> {
        let new_status = match event.event_type() {
            PaystackEventType::ChargeSuccess => OrderStatus::Paid,
            PaystackEventType::ChargeFailed => OrderStatus::Failed,
            PaystackEventType::Other(_) => return Ok(OrderUpdate::Ignored),
        };

        let reference = event
            .reference()
            .ok_or(OrderError::MissingField("reference"))?
            .to_string();

        let mut orders = self.orders.lock().expect("order map lock poisoned");
        match orders.get_mut(&reference) {
            Some(status) => {
                *status = new_status;
                Ok(OrderUpdate::StatusChanged {
                    reference,
                    status: new_status,
                })
            }
            None => Err(OrderError::NotFound(reference)),
        }
    }
}
