//! Events accepted by the registration state reducer

use super::field::{FieldName, FieldValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Replace a field's value without marking it touched
    SetField { field: FieldName, value: FieldValue },
    /// Add or remove a single hobby
    ToggleHobby(String),
    /// Focus left a field
    MarkTouched(FieldName),
    SubmitRequested,
    DismissDialog,
    CountryLoadStarted,
    CountriesLoaded(Vec<String>),
    CountryLoadFailed(String),
}

impl FormEvent {
    pub fn set(field: FieldName, value: impl Into<FieldValue>) -> Self {
        FormEvent::SetField {
            field,
            value: value.into(),
        }
    }
}
