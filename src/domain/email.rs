//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// The check is deliberately basic: a local part, an `@`, and a domain
/// containing a dot, none of which contain whitespace or another `@`.
///
/// # Example
///
/// ```
/// use contact_relay::domain::EmailAddress;
///
/// let email = EmailAddress::new("User@Example.com").unwrap();
/// assert_eq!(email.as_str(), "User@Example.com");
/// assert_eq!(email.normalize().as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::matches_pattern(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Check a raw value against the address pattern.
    pub fn matches_pattern(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Canonical form used server-side: lowercased.
    pub fn normalize(&self) -> Self {
        Self(self.0.to_lowercase())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}
