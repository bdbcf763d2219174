//! Field validation for contact submissions.
//!
//! Two authorities apply the same field rules with small differences:
//!
//! - [`server`] is binding. Its verdict decides whether a submission is relayed.
//! - [`client`] mirrors the browser form script and is advisory only. It
//!   exists so the form controller can reject obviously bad input before a
//!   round trip.
//!
//! The phone rule is where they diverge: the client only enforces a minimum
//! length of 10, the server requires 10 to 20 characters. Both are kept as
//! they are.
//!
//! All functions here are pure.

pub mod client;
pub mod server;

use crate::domain::Field;
use serde::Serialize;

/// Verdict for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub valid: bool,
    pub error_message: String,
}

impl FieldValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error_message: message.into(),
        }
    }
}

/// A failing field as reported in the 400 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Per-field verdicts for a whole form, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<(Field, FieldValidation)>,
}

impl ValidationReport {
    pub(crate) fn from_results(results: Vec<(Field, FieldValidation)>) -> Self {
        Self { results }
    }

    /// Form-level pass/fail.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, r)| r.valid)
    }

    /// Verdict for one field.
    pub fn get(&self, field: Field) -> Option<&FieldValidation> {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, r)| r)
    }

    /// Failing fields with their messages.
    pub fn errors(&self) -> Vec<FieldError> {
        self.results
            .iter()
            .filter(|(_, r)| !r.valid)
            .map(|(field, r)| FieldError {
                field: field.as_str().to_string(),
                message: r.error_message.clone(),
            })
            .collect()
    }
}

/// Trimmed value, or `None` when missing or blank.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_collects_errors_in_form_order() {
        let report = ValidationReport::from_results(vec![
            (Field::Name, FieldValidation::invalid("Name is required")),
            (Field::Email, FieldValidation::ok()),
            (Field::Message, FieldValidation::invalid("Message is required")),
        ]);

        assert!(!report.is_valid());
        assert!(report.get(Field::Email).unwrap().valid);
        assert!(report.get(Field::Phone).is_none());
        assert_eq!(
            report.errors(),
            vec![
                FieldError {
                    field: "name".to_string(),
                    message: "Name is required".to_string(),
                },
                FieldError {
                    field: "message".to_string(),
                    message: "Message is required".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_present_treats_blank_as_absent() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("   ")), None);
        assert_eq!(present(Some(" x ")), Some("x"));
    }
}
