//! PhoneNumber value object.

use super::errors::ValidationError;

/// A type-safe wrapper for phone numbers.
///
/// Only the character set is enforced here. Length bounds differ between
/// the advisory client check and the binding server check, so they live in
/// [`crate::validation`].
///
/// # Example
///
/// ```
/// use contact_relay::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.len(), 17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the character set.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - Can contain: ASCII digits, whitespace, hyphens, parentheses, plus sign
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::has_allowed_characters(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// True when the value is non-empty and every character is allowed.
    pub fn has_allowed_characters(phone: &str) -> bool {
        !phone.is_empty()
            && phone.chars().all(|c| {
                c.is_ascii_digit()
                    || c.is_whitespace()
                    || c == '-'
                    || c == '+'
                    || c == '('
                    || c == ')'
            })
    }

    /// Length in characters, formatting included.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
