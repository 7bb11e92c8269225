//! Payments command handlers.

mod create_intent;
mod process_webhook;

pub use create_intent::{CreateIntentCommand, CreateIntentError, CreateIntentHandler, IntentCreated};
pub use process_webhook::{
    ProcessWebhookCommand, ProcessWebhookError, ProcessWebhookHandler, ProcessWebhookResult,
};
