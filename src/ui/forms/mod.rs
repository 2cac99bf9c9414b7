//! Form rendering module
//!
//! - `field_renderer`: text fields, borders and inline error lines
//! - `choice_renderer`: country select, gender radios, hobbies multi-select
//! - `registration_form`: the form card as a whole

mod choice_renderer;
mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
