//! Form field identifiers and value objects

use std::fmt;

/// The fields of the registration form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Address,
    Country,
    Gender,
    Hobbies,
}

impl FieldName {
    /// All fields in the order they appear on screen
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Address,
        FieldName::Country,
        FieldName::Gender,
        FieldName::Hobbies,
    ];

    /// Stable key used in logs and serialized values
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Country => "country",
            Self::Gender => "gender",
            Self::Hobbies => "hobbies",
        }
    }

    /// Label shown in the field's border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Country => "Country",
            Self::Gender => "Gender",
            Self::Hobbies => "Hobbies/Interests",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Address)
    }

    /// Text fields accept typed characters directly
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Name | Self::Address)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}
