//! Inline error banner component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to show `message` inside a bordered banner of the given width
pub fn banner_height(message: &str, width: u16) -> u16 {
    let inner_width = width.saturating_sub(4).max(1) as usize;
    wrap_text(message, inner_width).len() as u16 + 2
}

/// Render the error banner shown above the form actions
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let inner_width = area.width.saturating_sub(4).max(1) as usize;
    let lines: Vec<Line> = wrap_text(message, inner_width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Red))))
        .collect();

    let block = Block::default()
        .title(Span::styled(
            " Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.chars().count() + word.chars().count() + 1 > max_width
                && !current_line.is_empty()
            {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
