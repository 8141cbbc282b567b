//! Cookie-backed session storage.
//!
//! The session marker lives in the visitor's browser, not on the server: the
//! cookie jar is the portal's per-origin key/value storage. Each request gets
//! its own [`CookieStorage`] snapshot of the `Cookie` header; writes update the
//! snapshot and queue `Set-Cookie` headers for the response.
//!
//! Cookies are neither signed nor encrypted. The portal only checks that the
//! marker is present.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, SET_COOKIE},
};
use tower_sessions::cookie::{Cookie, SameSite};

use vendor_portal_core::{KeyValueStorage, StorageError};

/// Attributes applied to every cookie the portal writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSettings {
    /// Add the `Secure` attribute (HTTPS deployments).
    pub secure: bool,
}

/// Per-request key/value storage over the browser cookie jar.
#[derive(Debug)]
pub struct CookieStorage {
    values: RwLock<HashMap<String, String>>,
    pending: Mutex<Vec<Cookie<'static>>>,
    settings: CookieSettings,
}

impl CookieStorage {
    /// Snapshot the cookies sent with a request.
    ///
    /// Malformed cookie pairs are skipped. If a name appears twice the last
    /// occurrence wins.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, settings: CookieSettings) -> Self {
        let values = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|raw| Cookie::split_parse(raw.to_owned()))
            .filter_map(Result::ok)
            .map(|cookie| (cookie.name().to_owned(), cookie.value().to_owned()))
            .collect();

        Self {
            values: RwLock::new(values),
            pending: Mutex::new(Vec::new()),
            settings,
        }
    }

    /// `Set-Cookie` headers for every write made through this storage, in
    /// write order.
    #[must_use]
    pub fn set_cookie_headers(&self) -> Vec<(axum::http::HeaderName, HeaderValue)> {
        let Ok(pending) = self.pending.lock() else {
            return Vec::new();
        };

        pending
            .iter()
            .filter_map(|cookie| match HeaderValue::from_str(&cookie.to_string()) {
                Ok(value) => Some((SET_COOKIE, value)),
                Err(e) => {
                    tracing::warn!(cookie = cookie.name(), error = %e, "Dropping unencodable cookie");
                    None
                }
            })
            .collect()
    }

    fn build_cookie(&self, key: &str, value: &str) -> Cookie<'static> {
        Cookie::build((key.to_owned(), value.to_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(self.settings.secure)
            .build()
    }

    fn queue(&self, cookie: Cookie<'static>) -> Result<(), StorageError> {
        self.pending
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?
            .push(cookie);
        Ok(())
    }
}

impl KeyValueStorage for CookieStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(bad) = value.chars().find(|&c| !is_cookie_octet(c)) {
            return Err(StorageError::InvalidValue {
                key: key.to_owned(),
                reason: format!("character {bad:?} is not allowed in a cookie value"),
            });
        }

        self.queue(self.build_cookie(key, value))?;
        self.values
            .write()
            .map_err(|e| StorageError::Backend(e.to_string()))?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut cookie = self.build_cookie(key, "");
        cookie.make_removal();

        self.queue(cookie)?;
        self.values
            .write()
            .map_err(|e| StorageError::Backend(e.to_string()))?
            .remove(key);
        Ok(())
    }
}

/// RFC 6265 `cookie-octet`.
const fn is_cookie_octet(c: char) -> bool {
    matches!(c, '\x21' | '\x23'..='\x2B' | '\x2D'..='\x3A' | '\x3C'..='\x5B' | '\x5D'..='\x7E')
}
