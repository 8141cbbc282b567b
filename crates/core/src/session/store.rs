//! Read-only accessor over the session marker.

use std::fmt;
use std::sync::Arc;

use super::storage::KeyValueStorage;

/// Storage key holding the signed-in vendor's email.
pub const SESSION_MARKER_KEY: &str = "vendor_email";

/// Accessor for the session marker.
///
/// Built either with a storage capability ([`SessionStore::new`]) or without
/// one ([`SessionStore::detached`]), for contexts that have no client storage
/// at all. A detached store always reports "not signed in".
///
/// Reads go straight to the backend on every call; nothing is cached, so a
/// sign-out is visible to the next check.
#[derive(Clone, Default)]
pub struct SessionStore {
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl SessionStore {
    /// Create an accessor over the given storage.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// Create an accessor with no storage capability.
    #[must_use]
    pub const fn detached() -> Self {
        Self { storage: None }
    }

    /// Whether a storage capability is configured.
    #[must_use]
    pub const fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Returns `true` iff a non-empty session marker is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_vendor_email()
            .is_some_and(|email| !email.is_empty())
    }

    /// Returns the stored session marker, if any.
    ///
    /// The value is returned exactly as stored. An empty marker is returned
    /// as `Some("")` even though it does not count as signed in.
    #[must_use]
    pub fn current_vendor_email(&self) -> Option<String> {
        self.storage.as_ref()?.get(SESSION_MARKER_KEY)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_storage", &self.has_storage())
            .finish()
    }
}
