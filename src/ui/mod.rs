//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use crate::state::Phase;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // The form stays visible while a submission is in flight
    match app.state.phase {
        Phase::Form | Phase::Loading => forms::draw_interview_form(frame, main_area, app),
        Phase::Success => success::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
