//! Application state and the registration state machine

use super::forms::{FormEvent, FormValues, RegistrationForm};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    /// Submission accepted, success dialog open
    SubmittedConfirming { submitted: FormValues },
}

/// Progress of the remote country list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountryLoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded(usize),
    Failed,
}

impl CountryLoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Idle => "countries: not loaded".to_string(),
            Self::Loading => "countries: loading…".to_string(),
            Self::Loaded(n) => format!("countries: {n}"),
            Self::Failed => "countries: unavailable".to_string(),
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub countries: Vec<String>,
    pub country_load: CountryLoadStatus,
    pub phase: Phase,
}

impl AppState {
    pub fn dialog_open(&self) -> bool {
        matches!(self.phase, Phase::SubmittedConfirming { .. })
    }

    /// Values accepted by the last successful submit while the dialog is open
    pub fn submitted(&self) -> Option<&FormValues> {
        match &self.phase {
            Phase::SubmittedConfirming { submitted } => Some(submitted),
            Phase::Editing => None,
        }
    }

    /// Apply an event in place
    pub fn apply(&mut self, event: FormEvent) {
        let state = std::mem::take(self);
        *self = reduce(state, event);
    }
}

/// The registration state machine.
///
/// Form edits and submits are ignored while the success dialog is open.
/// Country load events are always accepted.
pub fn reduce(mut state: AppState, event: FormEvent) -> AppState {
    match event {
        FormEvent::CountryLoadStarted => {
            state.country_load = CountryLoadStatus::Loading;
        }
        FormEvent::CountriesLoaded(countries) => {
            state.country_load = CountryLoadStatus::Loaded(countries.len());
            state.countries = countries;
            state.form.sync_country_cursor(&state.countries);
        }
        FormEvent::CountryLoadFailed(_) => {
            state.country_load = CountryLoadStatus::Failed;
        }
        FormEvent::DismissDialog => {
            state.phase = Phase::Editing;
        }
        _ if state.dialog_open() => {
            tracing::debug!("Ignoring {event:?} while the success dialog is open");
        }
        FormEvent::SetField { field, value } => {
            state.form.values.set(field, value);
        }
        FormEvent::ToggleHobby(value) => {
            if !state.form.values.toggle_hobby(&value) {
                tracing::warn!("Ignoring toggle of unknown hobby {value:?}");
            }
        }
        FormEvent::MarkTouched(field) => {
            state.form.touched.mark(field);
        }
        FormEvent::SubmitRequested => {
            state.form.touched.mark_all();
            let errors = state.form.errors();
            if errors.is_empty() {
                let submitted = std::mem::take(&mut state.form.values);
                state.form.reset();
                state.phase = Phase::SubmittedConfirming { submitted };
            } else {
                tracing::debug!(
                    "Submit rejected: {} invalid field(s): {:?}",
                    errors.len(),
                    errors.fields().map(|f| f.key()).collect::<Vec<_>>()
                );
            }
        }
    }
    state
}
