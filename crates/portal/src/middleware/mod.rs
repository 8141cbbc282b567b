//! HTTP middleware stack for the portal.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (one span per request)
//! 3. Request ID (fills the span's `request_id`, echoes the header)
//! 4. Security headers (CSP, frame options, etc.)
//! 5. Rate limiting on `POST /sign-in` only (governor)
//!
//! Session state is not middleware: protected handlers run the route guard
//! through the [`RequireVendor`] extractor.

pub mod auth;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{ClientStorage, GuardRedirect, OptionalVendor, RedirectNavigator, RequireVendor};
pub use rate_limit::sign_in_rate_limiter;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{CookieSettings, CookieStorage};
