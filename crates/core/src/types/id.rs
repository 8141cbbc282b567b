//! Vendor identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque vendor identifier.
///
/// Vendor IDs come from the fixture directory and are never generated by the
/// portal, so this is a thin wrapper around the original string rather than
/// a numeric key.
///
/// # Example
///
/// ```rust
/// # use vendor_portal_core::VendorId;
/// let id = VendorId::new("1");
/// assert_eq!(id.as_str(), "1");
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(String);

impl VendorId {
    /// Create a new ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VendorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VendorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<VendorId> for String {
    fn from(id: VendorId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_id_serializes_as_plain_string() {
        let id = VendorId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        let parsed: VendorId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_vendor_id_conversions() {
        let id: VendorId = "7".into();
        let raw: String = id.clone().into();
        assert_eq!(raw, "7");
        assert_eq!(VendorId::from(raw), id);
    }
}
