pub mod create;
pub mod delete;
pub mod edit;
pub mod list;

use serde::Serialize;

use crate::validate::{field, FieldErrors};

/// One-shot success message shown on the next List display.
///
/// It is a plain value returned by the mutating handler; the caller passes it
/// into [`list::show`] and drops it afterwards, so nothing leaks between
/// users or requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice(pub String);

impl Notice {
    pub fn registered(full_name: &str) -> Self {
        Notice(format!(
            "Student {full_name} has been registered successfully!"
        ))
    }

    pub fn updated(full_name: &str) -> Self {
        Notice(format!("Student {full_name} has been updated successfully!"))
    }

    pub fn deleted(full_name: &str) -> Self {
        Notice(format!("Student {full_name} has been deleted successfully!"))
    }
}

pub const DUPLICATE_REGISTRATION_MESSAGE: &str =
    "A student with this registration number already exists.";

/// The uniqueness rejection, attached to the registration number field.
fn duplicate_registration_errors() -> FieldErrors {
    FieldErrors::of(field::REGISTRATION_NUMBER, DUPLICATE_REGISTRATION_MESSAGE)
}
