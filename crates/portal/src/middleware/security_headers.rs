//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Adds restrictive security headers to all responses. Start locked down and
//! loosen only when specific functionality requires it.
//!
//! Headers a handler already set are left alone, so routes with a fixed
//! header contract (see `/api/hello`) keep their exact values.

use axum::{
    extract::Request,
    http::{
        HeaderMap, HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

/// Add security headers to all responses.
///
/// Headers applied (unless already present):
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: no-referrer` - Zero referrer leakage
/// - `Content-Security-Policy` - Strict CSP (see below)
/// - `Permissions-Policy` - Deny sensitive features
/// - `Cache-Control: no-store, max-age=0` - Vendor pages are per-visitor
/// - `Cross-Origin-Opener-Policy: same-origin` - Process isolation
/// - `Cross-Origin-Resource-Policy: same-origin` - Resource isolation
///
/// # CSP Policy
///
/// Pages are server-rendered forms with a single stylesheet and no scripts:
/// ```text
/// default-src 'none';
/// style-src 'self';
/// img-src 'self';
/// font-src 'self';
/// form-action 'self';
/// base-uri 'self';
/// frame-ancestors 'none'
/// ```
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_security_headers(response.headers_mut());
    response
}

/// Insert the default security headers into `headers`, keeping existing values.
pub fn apply_security_headers(headers: &mut HeaderMap) {
    set_default(headers, X_FRAME_OPTIONS, "DENY");
    set_default(headers, X_CONTENT_TYPE_OPTIONS, "nosniff");
    set_default(headers, REFERRER_POLICY, "no-referrer");

    set_default(
        headers,
        CONTENT_SECURITY_POLICY,
        "default-src 'none'; \
         style-src 'self'; \
         img-src 'self'; \
         font-src 'self'; \
         form-action 'self'; \
         base-uri 'self'; \
         frame-ancestors 'none'",
    );

    set_default(
        headers,
        HeaderName::from_static("permissions-policy"),
        "accelerometer=(), \
         browsing-topics=(), \
         camera=(), \
         display-capture=(), \
         geolocation=(), \
         gyroscope=(), \
         interest-cohort=(), \
         magnetometer=(), \
         microphone=(), \
         payment=(), \
         usb=()",
    );

    set_default(headers, CACHE_CONTROL, "no-store, max-age=0");

    set_default(
        headers,
        HeaderName::from_static("cross-origin-opener-policy"),
        "same-origin",
    );
    set_default(
        headers,
        HeaderName::from_static("cross-origin-resource-policy"),
        "same-origin",
    );
}

fn set_default(headers: &mut HeaderMap, name: HeaderName, value: &'static str) {
    headers
        .entry(name)
        .or_insert_with(|| HeaderValue::from_static(value));
}
