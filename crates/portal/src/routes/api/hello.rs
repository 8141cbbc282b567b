//! Example greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Response envelope for `/api/hello`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub data: HelloData,
}

#[derive(Debug, Serialize)]
pub struct HelloData {
    pub message: &'static str,
}

/// Return the static greeting.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        data: HelloData {
            message: "Hello World",
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_body() {
        let Json(body) = hello().await;
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"data":{"message":"Hello World"}}"#
        );
    }
}
