//! Simulated inquiry transport
//!
//! Stands in for the real email service: resolves after a fixed delay and
//! logs the serialized inquiry. A config switch forces the rejection path
//! so the error handling stays reachable.

use crate::state::Inquiry;
use async_trait::async_trait;
use std::time::Duration;

use super::traits::{Mailer, MailerError};

/// Default simulated network delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Mailer stub that always resolves after a fixed delay
pub struct SimulatedMailer {
    delay: Duration,
    fail: bool,
}

impl SimulatedMailer {
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }
}

impl Default for SimulatedMailer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, false)
    }
}

#[async_trait]
impl Mailer for SimulatedMailer {
    async fn send_inquiry(&mut self, inquiry: &Inquiry) -> Result<(), MailerError> {
        tokio::time::sleep(self.delay).await;

        let payload = serde_json::to_string(inquiry)
            .map_err(|e| MailerError(format!("could not serialize inquiry: {e}")))?;
        tracing::info!(id = %inquiry.id, %payload, "inquiry submitted");

        if self.fail {
            return Err(MailerError("simulated rejection".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn inquiry() -> Inquiry {
        Inquiry::new(
            "Ola",
            "ola@example.com",
            "123 45 678",
            "",
            "Nybygg",
            "Nytt tak over terrassen",
            false,
        )
    }

    #[tokio::test]
    async fn test_resolves_success_after_delay() {
        let mut mailer = SimulatedMailer::new(Duration::from_millis(20), false);
        let start = Instant::now();
        let result = mailer.send_inquiry(&inquiry()).await;
        assert!(result.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_forced_failure_rejects() {
        let mut mailer = SimulatedMailer::new(Duration::from_millis(1), true);
        let err = mailer.send_inquiry(&inquiry()).await.unwrap_err();
        assert!(err.to_string().contains("sending failed"));
    }

    #[tokio::test]
    async fn test_outcome_is_deterministic() {
        let mut mailer = SimulatedMailer::new(Duration::from_millis(1), false);
        let snapshot = inquiry();
        assert!(mailer.send_inquiry(&snapshot).await.is_ok());
        assert!(mailer.send_inquiry(&snapshot).await.is_ok());
    }
}
