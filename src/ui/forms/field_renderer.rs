//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How a field box should be drawn
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Shown dimmed when the value is empty and the field is not focused
    pub placeholder: &'a str,
    pub is_active: bool,
    /// Disabled fields are dimmed and never show a cursor
    pub is_enabled: bool,
}

/// Draw a boxed single-line field
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let show_cursor = field.is_active && field.is_enabled;

    let (style, border_style) = if show_cursor {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan),
        )
    } else if field.is_enabled {
        (Style::default(), Style::default().fg(Color::DarkGray))
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let cursor = if show_cursor { "▌" } else { "" };

    let value_span = if field.value.is_empty() && !show_cursor {
        Span::styled(
            field.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(field.value, style)
    };

    let content = Paragraph::new(Line::from(vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the difficulty selector as a row of options with the chosen one highlighted
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[(&str, bool)],
    is_active: bool,
    is_enabled: bool,
) {
    let focused = is_active && is_enabled;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = Vec::new();
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    for (idx, (option, selected)) in options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = match (*selected, is_enabled) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {option} "), style));
    }
    if focused {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
