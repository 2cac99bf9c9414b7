//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Success dialog overlays everything
    if app.state.dialog_open() {
        components::render_success_dialog(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::MockCountrySource;
    use crate::state::{FieldName, FormEvent};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn test_app() -> App {
        App::new(Arc::new(MockCountrySource::new()))
    }

    #[test]
    fn test_renders_all_field_labels() {
        let screen = render(&test_app());
        assert!(screen.contains("User Registration Form"));
        for field in FieldName::ALL {
            assert!(screen.contains(field.label()), "{}", field.label());
        }
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_errors_hidden_before_touch() {
        let screen = render(&test_app());
        assert!(!screen.contains("Name is required"));
    }

    #[test]
    fn test_errors_shown_after_failed_submit() {
        let mut app = test_app();
        app.dispatch(FormEvent::SubmitRequested);
        let screen = render(&app);
        assert!(screen.contains("Name is required"));
        assert!(screen.contains("Address is required"));
        assert!(screen.contains("Country is required"));
        assert!(screen.contains("Gender is required"));
        assert!(screen.contains("Select at least one hobby"));
    }

    #[test]
    fn test_success_dialog_rendered_when_open() {
        let mut app = test_app();
        app.dispatch(FormEvent::set(FieldName::Name, "Ann"));
        app.dispatch(FormEvent::set(FieldName::Address, "1 Main St"));
        app.dispatch(FormEvent::set(FieldName::Country, "Canada"));
        app.dispatch(FormEvent::set(FieldName::Gender, "female"));
        app.dispatch(FormEvent::ToggleHobby("Reading".into()));
        app.dispatch(FormEvent::SubmitRequested);

        let screen = render(&app);
        assert!(screen.contains("Details Submitted Successfully!"));

        app.dispatch(FormEvent::DismissDialog);
        assert!(!render(&app).contains("Details Submitted Successfully!"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
