//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{ADD_RECIPIENT_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Phase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the app title and endpoint status
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Interview Question Generator ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    spans.push(Span::raw(" "));
    if app.endpoint_configured() {
        let source = app
            .endpoint_source
            .map(|s| format!(" ({})", s.label()))
            .unwrap_or_default();
        spans.push(Span::styled("● ", Style::default().fg(Color::Green)));
        spans.push(Span::styled(
            format!("webhook configured{source}"),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled("○ ", Style::default().fg(Color::Red)));
        spans.push(Span::styled(
            "webhook URL not configured",
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let phase_style = match app.state.phase {
        Phase::Form => Style::default().fg(Color::Cyan),
        Phase::Loading => Style::default().fg(Color::Yellow),
        Phase::Success => Style::default().fg(Color::Green),
    };

    let spans = vec![
        Span::styled(format!(" {} ", app.state.phase.label()), phase_style),
        Span::styled(
            get_phase_hints(app.state.phase),
            Style::default().fg(Color::Gray),
        ),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current phase
fn get_phase_hints(phase: Phase) -> String {
    match phase {
        Phase::Form => format!(
            "Tab:next  ←/→:difficulty  {ADD_RECIPIENT_SHORTCUT}:add recipient  {SUBMIT_SHORTCUT}:submit  Esc:quit"
        ),
        Phase::Loading => format!("Sending request...  {RESET_SHORTCUT}:cancel and start over"),
        Phase::Success => "Enter/r:start over  q:quit".to_string(),
    }
}
