//! Layout components (form card, status bar)

use crate::app::App;
use crate::platform::{RELOAD_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{CountryLoadStatus, FieldName};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the centered form card
const CARD_WIDTH: u16 = 64;

/// Split the screen into the centered form card and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CARD_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .split(rows[0]);

    (columns[0], rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Country load indicator
    let load = app.state.country_load;
    let indicator = match load {
        CountryLoadStatus::Loaded(_) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        CountryLoadStatus::Loading => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        CountryLoadStatus::Failed | CountryLoadStatus::Idle => {
            Span::styled(" ○ ", Style::default().fg(Color::Red))
        }
    };
    spans.push(indicator);
    spans.push(Span::styled(load.label(), Style::default().fg(Color::Gray)));
    spans.push(Span::raw(" | "));

    // Focus-specific hints
    let hints = if app.state.dialog_open() {
        "Enter:OK  Esc:close".to_string()
    } else {
        get_focus_hints(app.state.form.focused_field())
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::Black)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the focused field (`None` is the Submit button)
fn get_focus_hints(focused: Option<FieldName>) -> String {
    let common = format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {RELOAD_SHORTCUT}:reload  ^C:quit");
    match focused {
        Some(FieldName::Name) => format!("type to edit  {common}"),
        Some(FieldName::Address) => format!("Enter:newline  {common}"),
        Some(FieldName::Country) => format!("↑↓:move  Enter:select  {common}"),
        Some(FieldName::Gender) => format!("←→:move  Space:select  {common}"),
        Some(FieldName::Hobbies) => format!("↑↓:move  Space:toggle  {common}"),
        None => format!("Enter:submit  {common}"),
    }
}
