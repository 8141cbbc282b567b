//! Integration tests for the vendor portal.
//!
//! The portal router is built in-process and driven with
//! `tower::ServiceExt::oneshot`; no server or network is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vendor-portal-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `route_guard` - Protected pages with and without a session marker
//! - `sign_in` - Sign-in/sign-out flows and the marker cookie
//! - `api` - The JSON API contract
//! - `middleware` - Security headers, request IDs, fallback, rate limiting

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    extract::ConnectInfo,
    http::{
        Request, Response,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};

use vendor_portal::config::PortalConfig;
use vendor_portal::services::VendorDirectory;
use vendor_portal::state::AppState;

/// Peer address attached to every request, as `axum::serve` does with
/// `into_make_service_with_connect_info`.
pub const TEST_PEER: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 10)), 50_000);

/// Build the portal router with the fixture directory and default config.
#[must_use]
pub fn test_app() -> Router {
    app_with_config(test_config())
}

/// Same as [`test_app`], but with client-address headers trusted.
#[must_use]
pub fn test_app_behind_proxy() -> Router {
    app_with_config(PortalConfig {
        trust_proxy: true,
        ..test_config()
    })
}

fn test_config() -> PortalConfig {
    PortalConfig {
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../portal/static"),
        ..PortalConfig::default()
    }
}

fn app_with_config(config: PortalConfig) -> Router {
    vendor_portal::app(AppState::new(config, VendorDirectory::fixture()))
}

fn builder(method: &str, uri: &str, cookie: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .extension(ConnectInfo(TEST_PEER));

    match cookie {
        Some(cookie) => builder.header(COOKIE, cookie),
        None => builder,
    }
}

/// `GET uri`, optionally with a `Cookie` header.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
#[allow(clippy::expect_used)]
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    builder("GET", uri, cookie)
        .body(Body::empty())
        .expect("valid GET request")
}

/// `POST uri` with a url-encoded form body, optionally with a `Cookie` header.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
#[allow(clippy::expect_used)]
pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    builder("POST", uri, cookie)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .expect("valid POST request")
}

/// Read a response body as UTF-8 text.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
#[allow(clippy::expect_used)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// The `Location` header, if any.
#[must_use]
pub fn location<B>(response: &Response<B>) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// All `Set-Cookie` header values.
#[must_use]
pub fn set_cookies<B>(response: &Response<B>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_owned)
        .collect()
}
