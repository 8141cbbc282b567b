//! Rate limiting middleware using governor and `tower_governor`.
//!
//! Only the sign-in form is limited: it is the one endpoint that checks a
//! password, so it is the one worth brute-forcing.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

// =============================================================================
// Client IP Key Extractor
// =============================================================================

/// Key extractor for the client's IP address.
///
/// The TCP peer address is the key. `X-Forwarded-For` (first entry) and
/// `X-Real-IP` are consulted only when `trust_proxy` is set, i.e. when the
/// portal sits behind a proxy that overwrites them.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientIpKeyExtractor {
    /// Take the client address from proxy headers when present.
    pub trust_proxy: bool,
}

impl ClientIpKeyExtractor {
    fn from_proxy_headers(headers: &HeaderMap) -> Option<IpAddr> {
        headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
            .or_else(|| {
                headers
                    .get("x-real-ip")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<IpAddr>().ok())
            })
    }
}

impl tower_governor::key_extractor::KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let forwarded = if self.trust_proxy {
            Self::from_proxy_headers(req.headers())
        } else {
            None
        };

        forwarded
            .or_else(|| {
                req.extensions()
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip())
            })
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

// =============================================================================
// Rate Limiter Configuration
// =============================================================================

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for sign-in: ~10 requests per minute per IP.
///
/// `trust_proxy` is passed to [`ClientIpKeyExtractor`].
///
/// Configuration: 1 request every 6 seconds (replenish), burst of 5.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(6)` and `burst_size(5)`), which are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn sign_in_rate_limiter(trust_proxy: bool) -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor { trust_proxy })
        .per_second(6) // Replenish 1 token every 6 seconds (~10/minute)
        .burst_size(5) // Allow burst of 5 requests
        .finish()
        .expect("rate limiter config with per_second(6) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_governor::key_extractor::KeyExtractor;

    use super::*;

    const DIRECT: ClientIpKeyExtractor = ClientIpKeyExtractor { trust_proxy: false };
    const PROXIED: ClientIpKeyExtractor = ClientIpKeyExtractor { trust_proxy: true };

    fn request(peer: Option<&str>) -> Request<()> {
        let mut req = Request::builder()
            .uri("/sign-in")
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .header("x-real-ip", "198.51.100.2")
            .body(())
            .unwrap();
        if let Some(peer) = peer {
            req.extensions_mut()
                .insert(ConnectInfo(peer.parse::<SocketAddr>().unwrap()));
        }
        req
    }

    fn ip(raw: &str) -> IpAddr {
        raw.parse().unwrap()
    }

    #[test]
    fn test_direct_ignores_proxy_headers() {
        let req = request(Some("192.0.2.9:51000"));
        assert_eq!(DIRECT.extract(&req).unwrap(), ip("192.0.2.9"));
    }

    #[test]
    fn test_direct_without_peer_is_an_error() {
        assert!(DIRECT.extract(&request(None)).is_err());
    }

    #[test]
    fn test_proxied_prefers_forwarded_for() {
        let req = request(Some("192.0.2.9:51000"));
        assert_eq!(PROXIED.extract(&req).unwrap(), ip("203.0.113.7"));
    }

    #[test]
    fn test_proxied_falls_back_to_real_ip() {
        let mut req = request(None);
        req.headers_mut().remove("x-forwarded-for");
        assert_eq!(PROXIED.extract(&req).unwrap(), ip("198.51.100.2"));
    }

    #[test]
    fn test_proxied_falls_back_to_peer_address() {
        let mut req = request(Some("192.0.2.9:51000"));
        req.headers_mut().clear();
        assert_eq!(PROXIED.extract(&req).unwrap(), ip("192.0.2.9"));
    }
}
