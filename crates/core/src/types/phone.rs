//! Chilean mobile phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a character other than digits, spaces, or a
    /// leading plus sign.
    #[error("phone number can only contain digits, spaces, and a leading +")]
    InvalidCharacter,
    /// The digits do not form a Chilean mobile number.
    #[error("phone number must be a Chilean mobile number (e.g. +56 9 1234 5678)")]
    InvalidFormat,
}

/// A Chilean mobile phone number.
///
/// Accepts an optional `+56`/`56` country prefix and optional spacing, e.g.
/// `+56 9 1234 5678`, `+56912345678`, or `912345678`. The trimmed input is
/// preserved as typed; only the shape is validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from a string, validating the Chilean mobile shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, contains an invalid
    /// character, or does not reduce to `[+56] 9` followed by eight digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let mut chars = s.chars();
        let valid_chars = chars
            .next()
            .is_some_and(|first| first == '+' || first.is_ascii_digit())
            && chars.all(|c| c.is_ascii_digit() || c == ' ');
        if !valid_chars {
            return Err(PhoneError::InvalidCharacter);
        }

        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let digits = compact
            .strip_prefix("+56")
            .or_else(|| compact.strip_prefix("56").filter(|rest| rest.len() == 9))
            .unwrap_or(&compact);

        let is_mobile = digits.len() == 9
            && digits.starts_with('9')
            && digits.chars().all(|c| c.is_ascii_digit());
        if !is_mobile {
            return Err(PhoneError::InvalidFormat);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as typed (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
