//! Submission success dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Details Submitted Successfully!";

/// Render the success dialog overlay centered on the screen
pub fn render_success_dialog(frame: &mut Frame) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" OK  "),
        Span::styled("Esc", key_style),
        Span::raw(" close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: SUCCESS_TITLE,
            accent: Color::Green,
            message: SUCCESS_MESSAGE,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
