//! Domain models for the portal.

pub mod session;

pub use session::CurrentVendor;
