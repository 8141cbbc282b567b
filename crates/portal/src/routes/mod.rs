//! HTTP route handlers for the portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /            - Entry page (sign-in form)
//! POST /sign-in     - Sign-in action (rate limited)
//! POST /sign-out    - Sign-out action
//! GET  /health      - Health check
//!
//! # Protected (route guard redirects to / without a session)
//! GET  /dashboard   - Vendor dashboard
//! GET  /calendar    - Month calendar
//!
//! # API
//! GET  /api/hello   - Example JSON route
//! ```

pub mod api;
pub mod calendar;
pub mod dashboard;
pub mod entry;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::sign_in_rate_limiter;
use crate::state::AppState;

/// Create the sign-in/sign-out routes router.
///
/// `trust_proxy` decides whether the sign-in rate limit reads proxy headers.
pub fn session_routes(trust_proxy: bool) -> Router<AppState> {
    let sign_in = Router::new()
        .route("/sign-in", post(entry::sign_in))
        .layer(sign_in_rate_limiter(trust_proxy));

    Router::new()
        .route("/", get(entry::show))
        .route("/sign-out", post(entry::sign_out))
        .merge(sign_in)
}

/// Create the guarded vendor routes router.
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route(entry::DASHBOARD_ROUTE, get(dashboard::show))
        .route("/calendar", get(calendar::show))
}

/// Create all routes for the portal.
pub fn routes(trust_proxy: bool) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(session_routes(trust_proxy))
        .merge(vendor_routes())
        .nest("/api", api::routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
