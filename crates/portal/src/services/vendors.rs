//! Vendor directory.
//!
//! The portal has no vendor database: the directory is a fixed list compiled
//! into the binary. Only the sign-in flow reads it; the session gate never
//! does.

use std::sync::Arc;

use vendor_portal_core::{Email, Vendor};

/// Raw fixture rows: `(id, name, email, password, active)`.
const FIXTURE: &[(&str, &str, &str, &str, bool)] = &[
    ("1", "OX Sport Shop", "oxsportshop@gmail.com", "oxsport123", true),
    ("2", "Green Valley Farms", "orders@greenvalleyfarms.com", "greenvalley123", true),
    ("3", "Harbor Coffee Roasters", "hello@harborcoffee.co", "harbor123", true),
    ("4", "Urban Threads", "contact@urbanthreads.store", "urbanthreads123", false),
    ("5", "Sunrise Bakery", "sunrisebakery@gmail.com", "sunrise123", true),
];

/// In-memory list of vendors.
///
/// Cheaply cloneable; all clones share the same list.
#[derive(Debug, Clone)]
pub struct VendorDirectory {
    vendors: Arc<[Vendor]>,
}

impl VendorDirectory {
    /// Create a directory from an explicit list.
    #[must_use]
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self {
            vendors: vendors.into(),
        }
    }

    /// The built-in vendor list.
    #[must_use]
    pub fn fixture() -> Self {
        let vendors = FIXTURE
            .iter()
            .filter_map(|&(id, name, email, password, active)| match Email::parse(email) {
                Ok(email) => Some(Vendor::new(id, name, email, password, active)),
                Err(e) => {
                    tracing::warn!(vendor_id = id, error = %e, "Skipping fixture vendor");
                    None
                }
            })
            .collect();
        Self::new(vendors)
    }

    /// Find a vendor by email, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.email.matches(email))
    }

    /// Iterate over all vendors in directory order.
    pub fn iter(&self) -> impl Iterator<Item = &Vendor> {
        self.vendors.iter()
    }

    /// Number of vendors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Number of vendors allowed to sign in.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.vendors.iter().filter(|v| v.active).count()
    }
}

impl Default for VendorDirectory {
    fn default() -> Self {
        Self::fixture()
    }
}
