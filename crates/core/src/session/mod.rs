//! Session gate for vendor pages.
//!
//! A vendor is "signed in" when the storage capability holds a non-empty
//! value under [`SESSION_MARKER_KEY`]. Nothing else is checked: there is no
//! expiry, no signature and no lookup against the vendor directory.
//!
//! - [`storage`] - the injected key/value capability and an in-memory backend
//! - [`store`] - read-only accessor over the session marker
//! - [`guard`] - the check protected views run before rendering

pub mod guard;
pub mod storage;
pub mod store;

pub use guard::{ENTRY_ROUTE, GuardState, Navigator, ProtectedView, RouteGuard};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use store::{SESSION_MARKER_KEY, SessionStore};
