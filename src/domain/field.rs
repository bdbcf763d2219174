//! Contact form field identifiers.

use super::errors::ValidationError;
use std::str::FromStr;

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Name of the field in the JSON body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    /// Whether the form cannot be submitted without this field.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Phone)
    }

    /// Label for a raw field name, falling back to the name itself.
    pub fn label_for(name: &str) -> String {
        name.parse::<Field>()
            .map(|f| f.label().to_string())
            .unwrap_or_else(|_| name.to_string())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "message" => Ok(Field::Message),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}
