//! Interview request form rendering

use super::field_renderer::{draw_choice_field, draw_field, FieldView};
use crate::app::App;
use crate::state::{Difficulty, FieldName, FocusTarget};
use crate::ui::components::{banner_height, render_action_button, render_error_banner, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Height of one boxed field
const FIELD_HEIGHT: u16 = 3;

/// Draw the form: fixed fields on the left, recipients and actions on the right
pub fn draw_interview_form(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_details(frame, main_chunks[0], app);
    draw_recipients_and_actions(frame, main_chunks[1], app);
}

/// Draw the five fixed fields
fn draw_details(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let enabled = !app.is_loading();

    let block = Block::default()
        .title(" Interview Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(section_color(
            matches!(form.focus, FocusTarget::Field(_)),
            enabled,
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); FieldName::ALL.len()];
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in FieldName::ALL.iter().enumerate() {
        let is_active = form.focus == FocusTarget::Field(*field);
        if *field == FieldName::DifficultyLevel {
            let options: Vec<(&str, bool)> = Difficulty::ALL
                .iter()
                .map(|d| (d.label(), form.difficulty_level == Some(*d)))
                .collect();
            draw_choice_field(
                frame,
                chunks[idx],
                field.label(),
                &options,
                is_active,
                enabled,
            );
        } else {
            draw_field(
                frame,
                chunks[idx],
                FieldView {
                    label: field.label(),
                    value: form.field_value(*field),
                    placeholder: field.placeholder(),
                    is_active,
                    is_enabled: enabled,
                },
            );
        }
    }
}

/// Draw recipient slots, the error banner and the action buttons
fn draw_recipients_and_actions(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let enabled = !app.is_loading();

    let error_message = app.state.error.as_ref().map(ToString::to_string);
    let error_height = error_message
        .as_deref()
        .map_or(0, |msg| banner_height(msg, area.width));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_HEIGHT + 3), // Recipients
            Constraint::Length(error_height),  // Error banner
            Constraint::Length(BUTTON_HEIGHT), // Actions
        ])
        .split(area);

    draw_recipients(frame, chunks[0], app);

    if let Some(message) = error_message.as_deref() {
        render_error_banner(frame, chunks[1], message);
    }

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_action_button(
        frame,
        button_chunks[0],
        "+ Add Recipient",
        form.focus == FocusTarget::AddRecipient && enabled,
        enabled,
        None,
    );

    let submit_label = if app.is_loading() {
        format!("{} Sending...", app.spinner())
    } else {
        "Generate & Send".to_string()
    };
    render_action_button(
        frame,
        button_chunks[1],
        &submit_label,
        form.focus == FocusTarget::Submit && enabled,
        enabled,
        Some(Color::Green),
    );
}

fn draw_recipients(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let enabled = !app.is_loading();
    let total = form.recipient_emails.len();

    let focused_slot = match form.focus {
        FocusTarget::Recipient(index) => Some(index),
        _ => None,
    };

    let block = Block::default()
        .title(format!(" Recipients ({total}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(section_color(focused_slot.is_some(), enabled)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let capacity = (chunks[0].height / FIELD_HEIGHT).max(1) as usize;
    let window = visible_window(total, focused_slot.unwrap_or(0), capacity);

    let slot_constraints: Vec<Constraint> = window
        .clone()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain([Constraint::Min(0)])
        .collect();
    let slot_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(slot_constraints)
        .split(chunks[0]);

    for (row, index) in window.clone().enumerate() {
        let label = format!("Recipient {}", index + 1);
        draw_field(
            frame,
            slot_chunks[row],
            FieldView {
                label: &label,
                value: &form.recipient_emails[index],
                placeholder: "recipient@company.com",
                is_active: focused_slot == Some(index),
                is_enabled: enabled,
            },
        );
    }

    // Footer: scroll position and remove availability
    let mut footer = Vec::new();
    if window.len() < total {
        footer.push(Span::styled(
            format!("{}-{} of {total}  ", window.start + 1, window.end),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let remove_hint = if form.can_remove_recipient() {
        Span::styled(
            format!("{}: remove", crate::platform::REMOVE_RECIPIENT_SHORTCUT),
            Style::default().fg(Color::Gray),
        )
    } else {
        Span::styled(
            "at least one recipient required",
            Style::default().fg(Color::DarkGray),
        )
    };
    footer.push(remove_hint);
    frame.render_widget(Paragraph::new(Line::from(footer)), chunks[1]);
}

fn section_color(is_focused: bool, is_enabled: bool) -> Color {
    if is_focused && is_enabled {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Range of recipient slots to draw so the focused slot stays visible
fn visible_window(total: usize, focused: usize, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    if total <= capacity {
        return 0..total;
    }
    let focused = focused.min(total - 1);
    let start = (focused + 1).saturating_sub(capacity);
    start..start + capacity
}
