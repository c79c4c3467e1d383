//! Trait abstraction for the inquiry transport to enable mocking in tests

use crate::state::Inquiry;
use async_trait::async_trait;
use thiserror::Error;

/// The one failure mode the workflow models: the transport rejected the
/// inquiry. No sub-classification (timeout, server error, ...) happens at
/// this layer.
#[derive(Debug, Error)]
#[error("sending failed: {0}")]
pub struct MailerError(pub String);

/// Trait for the inquiry transport. The workflow only needs asynchronous
/// success/failure signaling; a real deployment would implement this
/// against an email or notification service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one inquiry snapshot, resolving once the transport has
    /// accepted or rejected it
    async fn send_inquiry(&mut self, inquiry: &Inquiry) -> Result<(), MailerError>;
}
