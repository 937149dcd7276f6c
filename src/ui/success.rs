//! Confirmation view shown after a successful submission

use crate::app::App;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the confirmation panel with the endpoint's message and a start over button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [panel_area] = Layout::horizontal([Constraint::Max(70)])
        .flex(Flex::Center)
        .areas(area);
    let [panel_area] = Layout::vertical([Constraint::Max(16)])
        .flex(Flex::Center)
        .areas(panel_area);

    let block = Block::default()
        .title(" Request Sent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Message and summary
            Constraint::Length(BUTTON_HEIGHT), // Start over
        ])
        .margin(1)
        .split(inner);

    let form = &app.state.form;
    let message = app
        .state
        .result
        .as_ref()
        .map(|r| r.message.as_str())
        .unwrap_or_default();
    let difficulty = form.difficulty_level.map_or("-", |d| d.label());
    let recipient_count = form
        .recipient_emails
        .iter()
        .filter(|r| !r.trim().is_empty())
        .count();

    let label_style = Style::default().fg(Color::DarkGray);
    let content = vec![
        Line::from(Span::styled(
            "✓ Success",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Role:        ", label_style),
            Span::raw(form.job_role.trim().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Difficulty:  ", label_style),
            Span::raw(difficulty),
        ]),
        Line::from(vec![
            Span::styled("Recipients:  ", label_style),
            Span::raw(recipient_count.to_string()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let [button_area] = Layout::horizontal([Constraint::Length(24)])
        .flex(Flex::Center)
        .areas(chunks[1]);
    render_action_button(frame, button_area, "Start Over", true, true, None);
}
