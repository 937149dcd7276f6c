//! Form domain layer
//!
//! Field definitions and the interview form holder, including the dynamic
//! recipient list and keyboard focus navigation.

mod field;
mod form_state;

pub use field::{Difficulty, FieldKind, FieldName};
pub use form_state::{FocusTarget, Form, InterviewForm};
