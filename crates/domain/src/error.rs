//! Domain error types.

use common::EventId;
use thiserror::Error;

/// Failure reported by an event handler.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Creates a handler error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while publishing a domain event.
#[derive(Debug, Error)]
pub enum PublishError {
    /// A registered handler failed; handlers after it were not invoked.
    #[error("Handler {handler} failed for event {event_id}: {source}")]
    Handler {
        handler: &'static str,
        event_id: EventId,
        #[source]
        source: HandlerError,
    },
}
