//! Webhook client module for submitting interview requests over HTTP

mod client;
mod error;
mod traits;

pub use client::{SubmissionResult, WebhookClient};
pub use error::SubmissionError;
pub use traits::SubmissionClientTrait;

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;
