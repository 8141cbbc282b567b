//! Integration tests for the portal-wide middleware stack.

#![allow(clippy::unwrap_used)]

use axum::http::{
    StatusCode,
    header::{CACHE_CONTROL, CONTENT_SECURITY_POLICY, X_FRAME_OPTIONS},
};
use tower::ServiceExt;

use vendor_portal::middleware::REQUEST_ID_HEADER;
use vendor_portal_integration_tests::{
    body_text, get, post_form, test_app, test_app_behind_proxy,
};

#[tokio::test]
async fn test_health() {
    let response = test_app().oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_security_headers_on_pages() {
    let response = test_app().oneshot(get("/", None)).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers[X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers[CACHE_CONTROL], "no-store, max-age=0");
    assert!(
        headers[CONTENT_SECURITY_POLICY]
            .to_str()
            .unwrap()
            .contains("default-src 'none'")
    );
}

#[tokio::test]
async fn test_security_headers_on_redirects() {
    let response = test_app().oneshot(get("/dashboard", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = test_app()
        .oneshot(get("/no-such-page", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn test_request_id_generated() {
    let response = test_app().oneshot(get("/health", None)).await.unwrap();

    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let mut request = get("/health", None);
    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, "edge-42".parse().unwrap());

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "edge-42");
}

#[tokio::test]
async fn test_static_stylesheet_served() {
    let response = test_app()
        .oneshot(get("/static/css/main.css", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_sign_in_is_rate_limited() {
    let app = test_app();
    let form = "email=oxsportshop%40gmail.com&password=nope";

    // Burst of 5 passes through to the handler
    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(post_form("/sign-in", form, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = app
        .clone()
        .oneshot(post_form("/sign-in", form, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Other routes are not limited
    let response = app.oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rotating_forwarded_for_does_not_reset_limit() {
    let app = test_app();
    let form = "email=oxsportshop%40gmail.com&password=nope";

    // Same peer each time; only the client-supplied header changes
    for n in 0..6u8 {
        let mut request = post_form("/sign-in", form, None);
        request.headers_mut().insert(
            "x-forwarded-for",
            format!("198.51.100.{n}").parse().unwrap(),
        );
        let response = app.clone().oneshot(request).await.unwrap();

        let expected = if n < 5 {
            StatusCode::SEE_OTHER
        } else {
            StatusCode::TOO_MANY_REQUESTS
        };
        assert_eq!(response.status(), expected, "request {n}");
    }
}

#[tokio::test]
async fn test_trusted_proxy_limits_per_forwarded_client() {
    let app = test_app_behind_proxy();
    let form = "email=oxsportshop%40gmail.com&password=nope";
    let from = |client: &str| {
        let mut request = post_form("/sign-in", form, None);
        request
            .headers_mut()
            .insert("x-forwarded-for", client.parse().unwrap());
        request
    };

    for _ in 0..5 {
        let response = app.clone().oneshot(from("198.51.100.1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
    let response = app.clone().oneshot(from("198.51.100.1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // A different client behind the same proxy has its own budget
    let response = app.oneshot(from("198.51.100.2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
