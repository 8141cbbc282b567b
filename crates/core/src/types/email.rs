//! Vendor email addresses.

use core::fmt;

use serde::Serialize;

/// Why a typed-in address was refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    #[error("email must contain a single @ symbol")]
    MultipleAtSymbols,
    #[error("email needs text on both sides of the @")]
    MissingPart,
    #[error("email cannot contain whitespace")]
    Whitespace,
}

/// A vendor email address, as typed on the sign-in form or the CLI.
///
/// Only the shape is checked: one `@` with text on both sides, no
/// whitespace, at most [`Email::MAX_LENGTH`] bytes. The session marker is
/// never parsed into this type; the gate trusts whatever string is stored.
///
/// ```
/// use vendor_portal_core::Email;
///
/// assert!(Email::parse("orders@greenvalleyfarms.com").is_ok());
/// assert!(Email::parse("greenvalleyfarms.com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// RFC 5321 path limit.
    pub const MAX_LENGTH: usize = 254;

    /// Check the shape of `raw` and wrap it. Case is kept as given.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] the input trips over.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if raw.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace);
        }

        let (mailbox, host) = raw.split_once('@').ok_or(EmailError::MissingAtSymbol)?;
        if host.contains('@') {
            return Err(EmailError::MultipleAtSymbols);
        }
        if mailbox.is_empty() || host.is_empty() {
            return Err(EmailError::MissingPart);
        }

        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Same address as `raw`, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        self.0.eq_ignore_ascii_case(raw.trim())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
