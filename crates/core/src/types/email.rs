//! Login email addresses.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a string was rejected as an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email address is empty")]
    Empty,
    #[error("email address is {0} characters long; at most 254 are allowed")]
    TooLong(usize),
    #[error("email address has no '@'")]
    NoAt,
    #[error("email address has nothing before '@'")]
    NoLocalPart,
    #[error("email address has no domain after '@'")]
    NoDomain,
}

/// An email address used as a login identity.
///
/// [`Email::parse`] checks the shape `local@domain` on input the client
/// builds. Addresses decoded from service responses are taken as sent: the
/// service owns user records and does not enforce a format.
///
/// ```
/// use jwt_pizza_core::Email;
///
/// assert!(Email::parse("d@jwt.com").is_ok());
/// assert!(Email::parse("d.jwt.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// RFC 5321 path limit.
    pub const MAX_LENGTH: usize = 254;

    /// Validate `input`, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] the input runs into.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let address = input.trim();
        match address.len() {
            0 => return Err(EmailError::Empty),
            len if len > Self::MAX_LENGTH => return Err(EmailError::TooLong(len)),
            _ => {}
        }

        match address.split_once('@') {
            None => Err(EmailError::NoAt),
            Some(("", _)) => Err(EmailError::NoLocalPart),
            Some((_, "")) => Err(EmailError::NoDomain),
            Some(_) => Ok(Self(address.to_owned())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_service_addresses() {
        for address in ["d@jwt.com", "f@jwt.com", "pizza.franchisee+1@jwt.com", "a@b"] {
            assert_eq!(Email::parse(address).unwrap().as_str(), address);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_dropped() {
        assert_eq!(Email::parse("  f@jwt.com ").unwrap().as_str(), "f@jwt.com");
    }

    #[test]
    fn test_rejections() {
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
        assert_eq!(Email::parse("d.jwt.com"), Err(EmailError::NoAt));
        assert_eq!(Email::parse("@jwt.com"), Err(EmailError::NoLocalPart));
        assert_eq!(Email::parse("d@"), Err(EmailError::NoDomain));

        let long = format!("{}@jwt.com", "d".repeat(250));
        assert_eq!(Email::parse(&long), Err(EmailError::TooLong(258)));
    }

    #[test]
    fn test_decoding_keeps_service_value() {
        let email: Email = serde_json::from_str("\"a@jwt.com\"").unwrap();
        assert_eq!(email.to_string(), "a@jwt.com");
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"a@jwt.com\"");

        let legacy: Email = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(legacy.as_str(), "admin");
        assert!(Email::parse("admin").is_err());
    }
}
