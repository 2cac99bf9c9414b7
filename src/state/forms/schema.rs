//! Declarative validation rules for the registration form

use super::field::FieldName;
use super::values::FormValues;
use std::collections::BTreeMap;

/// A single constraint on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text or list must be non-empty
    Required,
    /// At least `n` list items, or `n` characters for a text field
    MinItems(usize),
}

/// One row of the schema: which field, which rule, and what to say when it fails
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: FieldName,
    pub rule: Rule,
    pub message: &'static str,
}

pub const REGISTRATION_SCHEMA: &[FieldRule] = &[
    FieldRule {
        field: FieldName::Name,
        rule: Rule::Required,
        message: "Name is required",
    },
    FieldRule {
        field: FieldName::Address,
        rule: Rule::Required,
        message: "Address is required",
    },
    FieldRule {
        field: FieldName::Country,
        rule: Rule::Required,
        message: "Country is required",
    },
    FieldRule {
        field: FieldName::Gender,
        rule: Rule::Required,
        message: "Gender is required",
    },
    FieldRule {
        field: FieldName::Hobbies,
        rule: Rule::MinItems(1),
        message: "Select at least one hobby",
    },
];

/// Field -> message for every field that failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Failing fields in focus order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

impl Rule {
    fn check(&self, values: &FormValues, field: FieldName) -> bool {
        let len = match field {
            FieldName::Hobbies => values.hobbies.len(),
            _ => values.text(field).chars().count(),
        };
        match self {
            Rule::Required => len > 0,
            Rule::MinItems(n) => len >= *n,
        }
    }
}

/// Validate `values` against the registration schema.
///
/// The first failing rule per field wins.
pub fn validate(values: &FormValues) -> FieldErrors {
    validate_with(REGISTRATION_SCHEMA, values)
}

pub fn validate_with(schema: &[FieldRule], values: &FormValues) -> FieldErrors {
    let mut errors = BTreeMap::new();
    for row in schema {
        if errors.contains_key(&row.field) {
            continue;
        }
        if !row.rule.check(values, row.field) {
            errors.insert(row.field, row.message);
        }
    }
    FieldErrors(errors)
}
