//! Sign-in error types.

use thiserror::Error;

use vendor_portal_core::{EmailError, StorageError};

/// Errors that can occur while signing a vendor in or out.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Unknown email or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The vendor exists but is deactivated.
    #[error("vendor account is inactive")]
    InactiveVendor,

    /// The session marker could not be written or removed.
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Short machine-readable code, used in `?error=` redirects.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "email",
            Self::InvalidCredentials => "credentials",
            Self::InactiveVendor => "inactive",
            Self::Storage(_) => "session",
        }
    }

    /// Message shown to the vendor for an `?error=` code.
    ///
    /// Unknown codes get a generic message so arbitrary query text is never
    /// echoed back.
    #[must_use]
    pub fn message_for_code(code: &str) -> &'static str {
        match code {
            "email" => "Please enter a valid email address.",
            "credentials" => "Invalid email or password.",
            "inactive" => "This vendor account is inactive. Contact support to reactivate it.",
            "session" => "We could not start your session. Please try again.",
            _ => "Sign-in failed. Please try again.",
        }
    }
}
