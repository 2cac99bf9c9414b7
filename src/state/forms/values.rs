//! Registration form values

use super::field::{FieldName, FieldValue};
use super::options::is_hobby;
use serde::{Deserialize, Serialize};

/// Current contents of every field in the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub address: String,
    pub country: String,
    pub gender: String,
    pub hobbies: Vec<String>,
}

impl FormValues {
    /// Borrow a text field. Hobbies has no text form and yields "".
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Address => &self.address,
            FieldName::Country => &self.country,
            FieldName::Gender => &self.gender,
            FieldName::Hobbies => "",
        }
    }

    /// Replace a field's value.
    ///
    /// A list written to a text field is joined, a text written to hobbies is
    /// treated as a single selection. Hobbies are always normalised.
    pub fn set(&mut self, field: FieldName, value: FieldValue) {
        if let Some(slot) = self.text_mut(field) {
            *slot = match value {
                FieldValue::Text(s) => s,
                FieldValue::List(items) => items.join(", "),
            };
            return;
        }

        let items = match value {
            FieldValue::List(items) => items,
            FieldValue::Text(s) if s.is_empty() => Vec::new(),
            FieldValue::Text(s) => vec![s],
        };
        self.hobbies = normalize_hobbies(items);
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::Name => Some(&mut self.name),
            FieldName::Address => Some(&mut self.address),
            FieldName::Country => Some(&mut self.country),
            FieldName::Gender => Some(&mut self.gender),
            FieldName::Hobbies => None,
        }
    }

    /// Add the hobby if absent, remove it if present.
    /// Returns false if `value` is not a known hobby.
    pub fn toggle_hobby(&mut self, value: &str) -> bool {
        if !is_hobby(value) {
            return false;
        }
        if let Some(pos) = self.hobbies.iter().position(|h| h == value) {
            self.hobbies.remove(pos);
        } else {
            self.hobbies.push(value.to_string());
        }
        true
    }
}

/// Drop unknown values and duplicates, keeping first occurrence order
fn normalize_hobbies(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !is_hobby(&item) {
            tracing::warn!("Ignoring unknown hobby {item:?}");
            continue;
        }
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
