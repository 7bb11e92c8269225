//! Order store port.
//!
//! Once a webhook event has passed signature verification, its business
//! effect (an order-status update) is handed to this collaborator. Keeping
//! it behind a trait means the verification core stays testable without any
//! real persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::webhook::PaystackEvent;

/// Port for applying verified payment events to order state.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Apply a verified event to the order it references.
    async fn apply_event(&self, event: &PaystackEvent) -> Result<OrderUpdate, OrderError>;
}

/// Outcome of applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderUpdate {
    /// The referenced order moved to a new status.
    StatusChanged {
        reference: String,
        status: OrderStatus,
    },
    /// The event carried no actionable order change.
    Ignored,
}

/// Order payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Failed,
}

/// Errors from order store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The event references an order we don't know about.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The event lacked the fields needed to locate an order.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Underlying storage failed.
    #[error("Storage error: {0}")]
    Storage(String),
}
