//! Authentication extractors.
//!
//! Protected handlers take [`RequireVendor`], which runs the session
//! [`RouteGuard`] against the request's cookies before the handler body runs.

use std::sync::{Arc, OnceLock};

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use vendor_portal_core::{
    ENTRY_ROUTE, KeyValueStorage, Navigator, RouteGuard, SessionStore,
};

use crate::error::add_breadcrumb;
use crate::middleware::session::CookieStorage;
use crate::models::CurrentVendor;
use crate::state::AppState;

/// Navigator that turns the guard's navigation into an HTTP redirect.
///
/// Only the first navigation is kept.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    target: OnceLock<String>,
}

impl RedirectNavigator {
    /// Path the guard navigated to, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.get().map(String::as_str)
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&self, path: &str) {
        let _ = self.target.set(path.to_owned());
    }
}

/// Rejection returned when the guard redirects.
#[derive(Debug)]
pub struct GuardRedirect(pub String);

impl IntoResponse for GuardRedirect {
    fn into_response(self) -> Response {
        Redirect::to(&self.0).into_response()
    }
}

/// Extractor for the request's cookie storage.
///
/// Handlers that write the session marker use this, then attach
/// [`CookieStorage::set_cookie_headers`] to their response.
pub struct ClientStorage(pub Arc<CookieStorage>);

impl FromRequestParts<AppState> for ClientStorage {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(Arc::new(CookieStorage::from_headers(
            &parts.headers,
            state.cookie_settings(),
        ))))
    }
}

/// Extractor that requires a signed-in vendor.
///
/// Runs the route guard with the request's cookies as storage and a
/// [`RedirectNavigator`]. If the guard redirects, the request is rejected
/// with a `303 See Other` to the entry page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireVendor(vendor): RequireVendor,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", vendor.display_name())
/// }
/// ```
pub struct RequireVendor(pub CurrentVendor);

impl FromRequestParts<AppState> for RequireVendor {
    type Rejection = GuardRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(CookieStorage::from_headers(
            &parts.headers,
            state.cookie_settings(),
        ));
        let navigator = Arc::new(RedirectNavigator::default());
        let guard = RouteGuard::new(
            SessionStore::new(storage),
            Some(Arc::clone(&navigator) as Arc<dyn Navigator>),
        );

        if !guard.enforce_authenticated() {
            add_breadcrumb(
                "auth",
                "Redirected visitor without a session",
                Some(&[("path", parts.uri.path())]),
            );
            let target = navigator.target().unwrap_or(ENTRY_ROUTE);
            return Err(GuardRedirect(target.to_owned()));
        }

        let email = guard.session().current_vendor_email().unwrap_or_default();
        Ok(Self(CurrentVendor::resolve(email, state.vendors())))
    }
}

/// Extractor that optionally gets the signed-in vendor.
///
/// Unlike `RequireVendor`, this never rejects and never redirects.
pub struct OptionalVendor(pub Option<CurrentVendor>);

impl FromRequestParts<AppState> for OptionalVendor {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = SessionStore::new(Arc::new(CookieStorage::from_headers(
            &parts.headers,
            state.cookie_settings(),
        )));

        let vendor = session
            .is_authenticated()
            .then(|| session.current_vendor_email())
            .flatten()
            .map(|email| CurrentVendor::resolve(email, state.vendors()));

        Ok(Self(vendor))
    }
}
