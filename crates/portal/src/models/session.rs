//! Session-related types.

use serde::Serialize;

use vendor_portal_core::Vendor;

use crate::services::VendorDirectory;

/// The signed-in vendor as seen by a protected page.
///
/// `email` is the raw session marker. `vendor` is the matching directory
/// entry, if there is one; the marker is trusted either way.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentVendor {
    /// Email from the session marker.
    pub email: String,
    /// Directory entry for that email, if any.
    pub vendor: Option<Vendor>,
}

impl CurrentVendor {
    /// Resolve a session marker against the directory.
    #[must_use]
    pub fn resolve(email: String, directory: &VendorDirectory) -> Self {
        let vendor = directory.find_by_email(&email).cloned();
        Self { email, vendor }
    }

    /// Name to greet the vendor with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.vendor.as_ref().map_or(self.email.as_str(), |v| v.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_vendor() {
        let current =
            CurrentVendor::resolve("oxsportshop@gmail.com".to_string(), &VendorDirectory::fixture());
        assert_eq!(current.display_name(), "OX Sport Shop");
        assert!(current.vendor.is_some());
    }

    #[test]
    fn test_resolve_unknown_marker_falls_back_to_email() {
        let current =
            CurrentVendor::resolve("stranger@example.com".to_string(), &VendorDirectory::fixture());
        assert!(current.vendor.is_none());
        assert_eq!(current.display_name(), "stranger@example.com");
    }
}
