//! Application state module

mod app_state;
mod forms;
mod payload;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use payload::SubmissionPayload;
pub use validation::ValidationError;
