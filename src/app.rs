//! Application state and core logic

use crate::countries::{CountryLoadEvent, CountryLoader, CountrySource};
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    AppState, FieldName, Form, FormEvent, SubmissionRecord, GENDER_OPTIONS, HOBBY_OPTIONS,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Rows skipped by PageUp/PageDown in the country list
const COUNTRY_PAGE: isize = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where the country list comes from
    source: Arc<dyn CountrySource>,
    /// Running country load, if any. Dropping it cancels the load.
    loader: Option<CountryLoader>,
    load_tx: UnboundedSender<CountryLoadEvent>,
    load_rx: UnboundedReceiver<CountryLoadEvent>,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance. Call `start_country_load` once a runtime is up.
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        let (load_tx, load_rx) = unbounded_channel();
        Self {
            state: AppState::default(),
            source,
            loader: None,
            load_tx,
            load_rx,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Kick off a background country load unless one is already running
    pub fn start_country_load(&mut self) {
        if self.state.country_load.is_loading() {
            tracing::debug!("Country load already in flight");
            return;
        }
        self.loader = Some(CountryLoader::spawn(
            Arc::clone(&self.source),
            self.load_tx.clone(),
        ));
        self.dispatch(FormEvent::CountryLoadStarted);
    }

    /// Apply any finished country loads. Called once per UI tick.
    pub fn poll_country_events(&mut self) {
        while let Ok(event) = self.load_rx.try_recv() {
            self.loader = None;
            if let CountryLoadEvent::Failed(_) = &event {
                self.status_message = Some("Could not load countries".to_string());
            }
            self.dispatch(event.into());
        }
    }

    /// Run an event through the reducer and log accepted submissions
    pub fn dispatch(&mut self, event: FormEvent) {
        let was_open = self.state.dialog_open();
        let is_submit = matches!(event, FormEvent::SubmitRequested);

        self.state.apply(event);

        if !was_open {
            if let Some(values) = self.state.submitted() {
                let record = SubmissionRecord::new(values.clone());
                tracing::info!("Form Values {}", record.to_pretty_json());
                self.status_message = None;
            } else if is_submit {
                let count = self.state.form.errors().len();
                self.status_message = Some(format!("Fix {count} field(s) before submitting"));
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Quit works everywhere, including over the dialog
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Success dialog is modal
        if self.state.dialog_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dispatch(FormEvent::DismissDialog);
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(FormEvent::SubmitRequested);
            }
            KeyCode::Char('r') if key.modifiers.contains(SHORTCUT_MODIFIER) => {
                self.start_country_load();
            }
            _ => match self.state.form.focused_field() {
                Some(field) if field.is_text() => self.handle_text_key(field, key),
                Some(FieldName::Country) => self.handle_country_key(key),
                Some(FieldName::Gender) => self.handle_gender_key(key),
                Some(FieldName::Hobbies) => self.handle_hobbies_key(key),
                Some(_) => {}
                None => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.dispatch(FormEvent::SubmitRequested);
                    }
                }
            },
        }
    }

    /// Leaving a field marks it touched
    fn leave_focused_field(&mut self) {
        if let Some(field) = self.state.form.focused_field() {
            self.dispatch(FormEvent::MarkTouched(field));
        }
    }

    fn focus_next(&mut self) {
        self.leave_focused_field();
        self.state.form.next_field();
        self.on_focus_changed();
    }

    fn focus_prev(&mut self) {
        self.leave_focused_field();
        self.state.form.prev_field();
        self.on_focus_changed();
    }

    fn on_focus_changed(&mut self) {
        if self.state.form.focused_field() == Some(FieldName::Country) {
            let form = &mut self.state.form;
            form.sync_country_cursor(&self.state.countries);
        }
    }

    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) {
        let current = self.state.form.values.text(field);
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut text = current.to_string();
                text.push(c);
                self.dispatch(FormEvent::set(field, text));
            }
            KeyCode::Backspace => {
                let mut text = current.to_string();
                if text.pop().is_some() {
                    self.dispatch(FormEvent::set(field, text));
                }
            }
            KeyCode::Enter if field.is_multiline() => {
                let mut text = current.to_string();
                text.push('\n');
                self.dispatch(FormEvent::set(field, text));
            }
            KeyCode::Enter => self.focus_next(),
            _ => {}
        }
    }

    fn handle_country_key(&mut self, key: KeyEvent) {
        let count = self.state.countries.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.form.move_cursor(-1, count),
            KeyCode::Down | KeyCode::Char('j') => self.state.form.move_cursor(1, count),
            KeyCode::PageUp => self.state.form.move_cursor(-COUNTRY_PAGE, count),
            KeyCode::PageDown => self.state.form.move_cursor(COUNTRY_PAGE, count),
            KeyCode::Home => self.state.form.move_cursor(-(count as isize), count),
            KeyCode::End => self.state.form.move_cursor(count as isize, count),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(country) = self.state.countries.get(self.state.form.country_cursor) {
                    let country = country.clone();
                    self.dispatch(FormEvent::set(FieldName::Country, country));
                }
            }
            _ => {}
        }
    }

    fn handle_gender_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
                self.state.form.move_cursor(-1, 0)
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
                self.state.form.move_cursor(1, 0)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(option) = GENDER_OPTIONS.get(self.state.form.gender_cursor) {
                    self.dispatch(FormEvent::set(FieldName::Gender, option.value));
                }
            }
            _ => {}
        }
    }

    fn handle_hobbies_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.form.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.state.form.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(option) = HOBBY_OPTIONS.get(self.state.form.hobby_cursor) {
                    self.dispatch(FormEvent::ToggleHobby(option.value.to_string()));
                }
            }
            _ => {}
        }
    }
}
