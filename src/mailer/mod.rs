//! Inquiry transport module

mod client;
mod traits;

pub use client::{SimulatedMailer, DEFAULT_DELAY};
pub use traits::Mailer;

#[cfg(test)]
pub use traits::{MailerError, MockMailer};
