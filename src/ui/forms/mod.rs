//! Form rendering module
//!
//! - `field_renderer`: boxed single-line field rendering
//! - `interview_form`: the interview request form with its recipient list

mod field_renderer;
mod interview_form;

pub use interview_form::draw_interview_form;
