//! Advisory validation rules mirrored from the browser form.
//!
//! These rules exist for user experience only. The server never trusts
//! them; see [`super::server`].

use super::{present, FieldValidation, ValidationReport};
use crate::domain::{ContactForm, EmailAddress, Field, PhoneNumber};

/// Minimum phone length checked before submitting. No upper bound.
pub const PHONE_MIN_LEN: usize = 10;

/// Validate one field the way the form does on blur.
pub fn validate_field(field: Field, value: Option<&str>) -> FieldValidation {
    let Some(value) = present(value) else {
        return if field.is_required() {
            FieldValidation::invalid(format!("{} is required", field.label()))
        } else {
            FieldValidation::ok()
        };
    };

    match field {
        Field::Email if !EmailAddress::matches_pattern(value) => {
            FieldValidation::invalid("Please enter a valid email address")
        }
        Field::Phone
            if !PhoneNumber::has_allowed_characters(value)
                || value.chars().count() < PHONE_MIN_LEN =>
        {
            FieldValidation::invalid("Please enter a valid phone number")
        }
        _ => FieldValidation::ok(),
    }
}

/// Validate one input by its form name, as done on blur.
///
/// Known fields use their own rules. Any other input only has the
/// `required` check, labelled with its raw name.
pub fn validate_input(name: &str, value: Option<&str>, required: bool) -> FieldValidation {
    if let Ok(field) = name.parse::<Field>() {
        return validate_field(field, value);
    }

    if required && present(value).is_none() {
        FieldValidation::invalid(format!("{} is required", Field::label_for(name)))
    } else {
        FieldValidation::ok()
    }
}

/// Validate the required fields, plus the phone when one was entered.
pub fn validate_form(form: &ContactForm) -> ValidationReport {
    ValidationReport::from_results(
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required() || present(form.get(*field)).is_some())
            .map(|field| (field, validate_field(field, form.get(field))))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_messages_use_labels() {
        assert_eq!(
            validate_field(Field::Name, Some(" ")).error_message,
            "Name is required"
        );
        assert_eq!(
            validate_field(Field::Email, None).error_message,
            "Email is required"
        );
        assert_eq!(
            validate_field(Field::Message, Some("")).error_message,
            "Message is required"
        );
    }

    #[test]
    fn test_client_has_no_length_rules_for_name_and_message() {
        assert!(validate_field(Field::Name, Some("J")).valid);
        assert!(validate_field(Field::Name, Some("R2-D2")).valid);
        assert!(validate_field(Field::Message, Some("hi")).valid);
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(
            validate_field(Field::Email, Some("not-an-email")).error_message,
            "Please enter a valid email address"
        );
        assert!(validate_field(Field::Email, Some("a@b.co")).valid);
    }

    #[test]
    fn test_phone_rule() {
        assert!(validate_field(Field::Phone, None).valid);
        assert_eq!(
            validate_field(Field::Phone, Some("abc-not-valid")).error_message,
            "Please enter a valid phone number"
        );
        assert!(!validate_field(Field::Phone, Some("555-1234")).valid);
        assert!(validate_field(Field::Phone, Some("+1 (555) 123-4567")).valid);
        assert!(validate_field(Field::Phone, Some(&"5".repeat(40))).valid);
    }

    #[test]
    fn test_form_skips_blank_phone() {
        let form = ContactForm::new("Jo", "jo@example.com", Some("  "), "Hello");
        let report = validate_form(&form);
        assert!(report.is_valid());
        assert!(report.get(Field::Phone).is_none());

        let form = ContactForm::new("Jo", "jo@example.com", Some("12"), "Hello");
        let report = validate_form(&form);
        assert!(!report.is_valid());
        assert_eq!(report.errors()[0].field, "phone");
    }

    #[test]
    fn test_validate_input_by_name() {
        assert_eq!(
            validate_input("email", Some("nope"), true).error_message,
            "Please enter a valid email address"
        );
        assert_eq!(
            validate_input("subject", Some("  "), true).error_message,
            "subject is required"
        );
        assert!(validate_input("subject", None, false).valid);
        assert!(validate_input("subject", Some("Orders"), true).valid);
    }

    #[test]
    fn test_validation_is_idempotent() {
        for value in [None, Some(""), Some("bad"), Some("a@b.co")] {
            assert_eq!(
                validate_field(Field::Email, value),
                validate_field(Field::Email, value)
            );
        }
    }
}
