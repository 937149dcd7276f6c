//! Trait abstraction for the submission client to enable mocking in tests

use super::client::SubmissionResult;
use super::error::SubmissionError;
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// Sends a validated payload to the endpoint and reports the single outcome
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// Whether an endpoint address is available
    fn is_configured(&self) -> bool;

    /// Perform one request/response exchange
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionResult, SubmissionError>;
}
