//! Business logic services for the portal.
//!
//! # Services
//!
//! - `vendors` - The fixed vendor directory
//! - `auth` - Vendor sign-in and sign-out (the only writers of the session marker)

pub mod auth;
pub mod vendors;

pub use auth::{AuthError, authenticate, sign_in, sign_out};
pub use vendors::VendorDirectory;
