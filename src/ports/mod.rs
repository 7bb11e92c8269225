//! Ports: trait contracts between the application core and the outside world.

mod order_store;
mod payment_provider;

pub use order_store::{OrderError, OrderStatus, OrderStore, OrderUpdate};
pub use payment_provider::{
    PaymentError, PaymentErrorCode, PaymentProvider, TransactionAuthorization,
};
