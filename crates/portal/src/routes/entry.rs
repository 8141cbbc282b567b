//! Entry page and sign-in/sign-out handlers.
//!
//! `/` is where visitors without a session land, either directly or via the
//! route guard's redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use vendor_portal_core::ENTRY_ROUTE;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{ClientStorage, OptionalVendor};
use crate::models::CurrentVendor;
use crate::services::{self, AuthError};
use crate::state::AppState;

/// Where a successful sign-in lands.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

// =============================================================================
// Form & Query Types
// =============================================================================

/// Sign-in form data.
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Entry (sign-in) page template.
#[derive(Template, WebTemplate)]
#[template(path = "entry.html")]
pub struct EntryTemplate {
    pub error: Option<&'static str>,
    pub current: Option<CurrentVendor>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the entry page.
pub async fn show(
    OptionalVendor(current): OptionalVendor,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    EntryTemplate {
        error: query.error.as_deref().map(AuthError::message_for_code),
        current,
    }
}

/// Handle sign-in form submission.
///
/// On success the session marker cookie is set and the vendor is sent to the
/// dashboard. Failures go back to the entry page with an `?error=` code.
pub async fn sign_in(
    State(state): State<AppState>,
    ClientStorage(storage): ClientStorage,
    Form(form): Form<SignInForm>,
) -> Response {
    match services::sign_in(state.vendors(), &*storage, &form.email, &form.password) {
        Ok(vendor) => {
            set_sentry_user(&vendor.id, Some(vendor.email.as_str()));
            (
                AppendHeaders(storage.set_cookie_headers()),
                Redirect::to(DASHBOARD_ROUTE),
            )
                .into_response()
        }
        Err(e) => {
            if matches!(e, AuthError::Storage(_)) {
                tracing::error!(error = %e, "Failed to write session marker");
            } else {
                tracing::warn!(error = %e, "Vendor sign-in failed");
            }
            Redirect::to(&format!("{ENTRY_ROUTE}?error={}", e.code())).into_response()
        }
    }
}

/// Handle sign-out.
///
/// # Errors
///
/// Returns `AppError::Auth` if the marker removal cannot be queued.
pub async fn sign_out(ClientStorage(storage): ClientStorage) -> Result<Response> {
    services::sign_out(&*storage)?;
    clear_sentry_user();

    Ok((
        AppendHeaders(storage.set_cookie_headers()),
        Redirect::to(ENTRY_ROUTE),
    )
        .into_response())
}
