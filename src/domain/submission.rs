//! Raw and validated contact submissions.

use super::field::Field;
use super::phone::PhoneNumber;
use serde::{Deserialize, Serialize};

/// The contact form body as received over the wire.
///
/// Every field may be missing or `null`; the validators decide what that
/// means. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Convenience constructor for a form with every required field set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: phone.map(str::to_string),
            message: Some(message.into()),
        }
    }

    /// Raw value of a field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    /// Copy with every value trimmed and a blank phone dropped.
    ///
    /// This is the payload shape the form controller posts.
    pub fn trimmed(&self) -> Self {
        let trim = |v: &Option<String>| v.as_deref().map(|s| s.trim().to_string());
        Self {
            name: Some(trim(&self.name).unwrap_or_default()),
            email: Some(trim(&self.email).unwrap_or_default()),
            phone: trim(&self.phone).filter(|p| !p.is_empty()),
            message: Some(trim(&self.message).unwrap_or_default()),
        }
    }
}

/// A submission that passed validation and sanitization.
///
/// Lives for one request and is dropped once the relay call completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: Option<PhoneNumber>,
    pub message: String,
}

impl Submission {
    /// Names of required fields that are empty.
    pub fn empty_required_fields(&self) -> Vec<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
