//! Binding server-side validation rules.
//!
//! Values are trimmed before every check. Only the first failing rule of a
//! field is reported.

use super::{present, FieldValidation, ValidationReport};
use crate::domain::{ContactForm, EmailAddress, Field, PhoneNumber};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("Failed to compile name regex"));

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const PHONE_MIN_LEN: usize = 10;
pub const PHONE_MAX_LEN: usize = 20;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 2000;

/// Validate one field. `None` means the key was missing or `null`.
pub fn validate_field(field: Field, value: Option<&str>) -> FieldValidation {
    let value = present(value);

    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
        Field::Message => validate_message(value),
    }
}

/// Validate every field of a form.
pub fn validate_form(form: &ContactForm) -> ValidationReport {
    ValidationReport::from_results(
        Field::ALL
            .into_iter()
            .map(|field| (field, validate_field(field, form.get(field))))
            .collect(),
    )
}

fn validate_name(value: Option<&str>) -> FieldValidation {
    let Some(name) = value else {
        return FieldValidation::invalid("Name is required");
    };

    if !within(name, NAME_MIN_LEN, NAME_MAX_LEN) {
        return FieldValidation::invalid("Name must be between 2 and 100 characters");
    }

    if !NAME_REGEX.is_match(name) {
        return FieldValidation::invalid("Name contains invalid characters");
    }

    FieldValidation::ok()
}

fn validate_email(value: Option<&str>) -> FieldValidation {
    match value {
        None => FieldValidation::invalid("Email is required"),
        Some(email) if !EmailAddress::matches_pattern(email) => {
            FieldValidation::invalid("Please provide a valid email address")
        }
        Some(_) => FieldValidation::ok(),
    }
}

fn validate_phone(value: Option<&str>) -> FieldValidation {
    // Optional: only checked when a value is present
    let Some(phone) = value else {
        return FieldValidation::ok();
    };

    let Ok(phone) = PhoneNumber::new(phone) else {
        return FieldValidation::invalid("Phone number contains invalid characters");
    };

    if !(PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&phone.len()) {
        return FieldValidation::invalid("Phone number must be between 10 and 20 characters");
    }

    FieldValidation::ok()
}

fn validate_message(value: Option<&str>) -> FieldValidation {
    let Some(message) = value else {
        return FieldValidation::invalid("Message is required");
    };

    if !within(message, MESSAGE_MIN_LEN, MESSAGE_MAX_LEN) {
        return FieldValidation::invalid("Message must be between 10 and 2000 characters");
    }

    FieldValidation::ok()
}

// Counts Unicode scalar values, so an emoji is one character here where a
// browser's `String.length` counts two UTF-16 units.
fn within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}
