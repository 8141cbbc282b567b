//! Core types for the vendor portal.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod vendor;

pub use email::{Email, EmailError};
pub use id::VendorId;
pub use vendor::Vendor;
