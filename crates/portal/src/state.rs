//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::PortalConfig;
use crate::middleware::session::CookieSettings;
use crate::services::VendorDirectory;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It holds only immutable data:
/// per-visitor session state lives in the visitor's cookies.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    vendors: VendorDirectory,
    cookies: CookieSettings,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: PortalConfig, vendors: VendorDirectory) -> Self {
        let cookies = CookieSettings {
            secure: config.is_secure(),
        };

        Self {
            inner: Arc::new(AppStateInner {
                config,
                vendors,
                cookies,
            }),
        }
    }

    /// Get a reference to the portal configuration.
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Get a reference to the vendor directory.
    #[must_use]
    pub fn vendors(&self) -> &VendorDirectory {
        &self.inner.vendors
    }

    /// Attributes for cookies written by the portal.
    #[must_use]
    pub fn cookie_settings(&self) -> CookieSettings {
        self.inner.cookies
    }
}
