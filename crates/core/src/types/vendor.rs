//! Vendor record.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::{Email, VendorId};

/// A vendor account as listed in the vendor directory.
///
/// The password is the directory's plain credential. It is wrapped in a
/// [`SecretString`] so it never shows up in `Debug` output or serialized
/// listings, but it is not hashed: the portal makes no claim to real
/// credential security.
#[derive(Debug, Clone, Serialize)]
pub struct Vendor {
    /// Directory identifier.
    pub id: VendorId,
    /// Display name.
    pub name: String,
    /// Sign-in email address.
    pub email: Email,
    /// Sign-in password.
    #[serde(skip_serializing)]
    pub password: SecretString,
    /// Whether the vendor may sign in.
    pub active: bool,
}

impl Vendor {
    /// Create a new vendor record.
    #[must_use]
    pub fn new(
        id: impl Into<VendorId>,
        name: impl Into<String>,
        email: Email,
        password: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email,
            password: SecretString::from(password.into()),
            active,
        }
    }

    /// Check a candidate password against the stored one.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose_secret() == candidate
    }

    /// Human-readable account status, as shown on status badges.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn vendor() -> Vendor {
        Vendor::new(
            "1",
            "OX Sport Shop",
            Email::parse("oxsportshop@gmail.com").unwrap(),
            "ox-sport-2024",
            true,
        )
    }

    #[test]
    fn test_password_matches() {
        let vendor = vendor();
        assert!(vendor.password_matches("ox-sport-2024"));
        assert!(!vendor.password_matches("OX-SPORT-2024"));
        assert!(!vendor.password_matches(""));
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let debug = format!("{:?}", vendor());
        assert!(debug.contains("OX Sport Shop"));
        assert!(!debug.contains("ox-sport-2024"));
    }

    #[test]
    fn test_serialize_skips_password() {
        let json = serde_json::to_value(vendor()).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["email"], "oxsportshop@gmail.com");
        assert_eq!(json["active"], true);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_status_label() {
        let mut vendor = vendor();
        assert_eq!(vendor.status_label(), "Active");
        vendor.active = false;
        assert_eq!(vendor.status_label(), "Inactive");
    }
}
