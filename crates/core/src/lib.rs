//! Vendor Portal Core - Shared types and the session gate.
//!
//! This crate provides the pieces used by every vendor portal component:
//! - `portal` - The vendor-facing web front end
//! - `cli` - Command-line tools for inspecting vendors and sessions
//!
//! # Architecture
//!
//! The core crate contains only types, traits and synchronous logic - no
//! network access, no filesystem access, no HTTP types. Storage and
//! navigation are capabilities injected by the host, so the same gate runs
//! inside an axum request, a CLI command, or a unit test.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for vendor IDs and emails, and the [`Vendor`] record
//! - [`session`] - Session marker accessor and route guard

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod session;
pub mod types;

pub use session::{
    ENTRY_ROUTE, GuardState, KeyValueStorage, MemoryStorage, Navigator, ProtectedView,
    RouteGuard, SESSION_MARKER_KEY, SessionStore, StorageError,
};
pub use types::*;
