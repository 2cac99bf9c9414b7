//! Registration form state: values, touched flags, focus and list cursors

use super::field::FieldName;
use super::options::{GENDER_OPTIONS, HOBBY_OPTIONS};
use super::schema::{validate, FieldErrors};
use super::values::FormValues;
use std::collections::BTreeSet;

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Fields the user has interacted with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet(BTreeSet<FieldName>);

impl TouchedSet {
    pub fn mark(&mut self, field: FieldName) {
        self.0.insert(field);
    }

    pub fn mark_all(&mut self) {
        self.0.extend(FieldName::ALL);
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.0.contains(&field)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Index of the Submit button row in focus order
pub const SUBMIT_ROW: usize = FieldName::ALL.len();

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub values: FormValues,
    pub touched: TouchedSet,
    /// 0..=4 are the fields in `FieldName::ALL` order, 5 is the Submit button
    pub active_field_index: usize,
    /// Highlighted row in the country list
    pub country_cursor: usize,
    /// Highlighted gender option
    pub gender_cursor: usize,
    /// Highlighted hobby option
    pub hobby_cursor: usize,
}

impl RegistrationForm {
    /// The field that has focus, `None` when the Submit button is focused
    pub fn focused_field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Errors for the current values, regardless of touched state
    pub fn errors(&self) -> FieldErrors {
        validate(&self.values)
    }

    /// Error message to render under `field`, if it is touched and invalid
    pub fn visible_error(&self, field: FieldName) -> Option<&'static str> {
        if !self.touched.is_touched(field) {
            return None;
        }
        self.errors().get(field)
    }

    /// Clear values and touched flags, return focus to the first field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move the cursor of the focused choice field by `delta`, clamped to its options.
    /// `country_count` is the current country list length.
    pub fn move_cursor(&mut self, delta: isize, country_count: usize) {
        let (cursor, len) = match self.focused_field() {
            Some(FieldName::Country) => (&mut self.country_cursor, country_count),
            Some(FieldName::Gender) => (&mut self.gender_cursor, GENDER_OPTIONS.len()),
            Some(FieldName::Hobbies) => (&mut self.hobby_cursor, HOBBY_OPTIONS.len()),
            _ => return,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let next = (*cursor as isize + delta).clamp(0, len as isize - 1);
        *cursor = next as usize;
    }

    /// Place the country cursor on the selected country, if it is in `countries`
    pub fn sync_country_cursor(&mut self, countries: &[String]) {
        self.country_cursor = countries
            .iter()
            .position(|c| *c == self.values.country)
            .unwrap_or(0);
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
