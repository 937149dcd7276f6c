//! Submission error taxonomy

use crate::state::ValidationError;
use thiserror::Error;

/// Everything that can stop a submission from producing a result.
///
/// The `Display` text is exactly what the error banner shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Form failed local checks, nothing was sent
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No endpoint address configured
    #[error(
        "Webhook URL not configured. Set INTERVIEW_TUI_WEBHOOK_URL or add \"webhook_url\" to the config file."
    )]
    Configuration,

    /// Endpoint answered with a non-2xx status
    #[error("Failed to submit form. Please try again.")]
    Transport { status: u16 },

    /// Endpoint answered 2xx but reported `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Network failure or unreadable response; the detail is for logs only
    #[error("An unexpected error occurred. Please try again.")]
    Unknown(String),
}

impl SubmissionError {
    /// Short kind name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Configuration => "configuration",
            Self::Transport { .. } => "transport",
            Self::Rejected(_) => "rejected",
            Self::Unknown(_) => "unknown",
        }
    }
}
