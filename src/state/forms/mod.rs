//! Form domain layer
//!
//! Field identifiers, values, the validation schema, and the static choice
//! tables for the registration form.

mod event;
mod field;
mod form_state;
mod options;
mod schema;
mod values;

pub use event::FormEvent;
pub use field::FieldName;
pub use form_state::{Form, RegistrationForm};
pub use options::{GENDER_OPTIONS, HOBBY_OPTIONS};
pub use values::FormValues;
