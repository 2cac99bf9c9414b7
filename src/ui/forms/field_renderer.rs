//! Field rendering utilities for forms

use crate::state::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border color for a field: red when it shows an error, cyan when focused
pub fn border_color(is_active: bool, has_error: bool) -> Color {
    if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Bordered block titled with the field label
pub fn field_block(field: FieldName, is_active: bool, has_error: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, has_error)))
}

/// Split a field area into the bordered input and the one-row helper line below it
pub fn split_helper(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the helper line with the field's error, if any
pub fn draw_helper_text(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let helper = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(helper, area);
    }
}

/// Draw a text field with its helper line
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let (input_area, helper_area) = split_helper(area);

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if value.is_empty() && !is_active {
        vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect()
    };
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    // Keep the cursor line visible in multi-line fields
    let inner_height = input_area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height.max(1)) as u16;

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(field_block(field, is_active, error.is_some()));
    frame.render_widget(paragraph, input_area);

    draw_helper_text(frame, helper_area, error);
}
