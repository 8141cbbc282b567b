//! Session marker commands.
//!
//! # Usage
//!
//! ```bash
//! vp-cli session status --storage ~/.vendor-portal.json
//! vp-cli session sign-in -e oxsportshop@gmail.com -p oxsport123 --storage ~/.vendor-portal.json
//! vp-cli session check --storage ~/.vendor-portal.json
//! vp-cli session sign-out --storage ~/.vendor-portal.json
//! ```
//!
//! Without a storage file the commands run detached: the marker reads as
//! absent and there is no client to redirect.

use std::io::Write;
use std::sync::Arc;

use vendor_portal::middleware::RedirectNavigator;
use vendor_portal::services::{self, VendorDirectory};
use vendor_portal_core::{KeyValueStorage, Navigator, RouteGuard, SessionStore};

use super::CliError;
use crate::storage::FileStorage;

/// Storage the session commands run against.
#[derive(Debug, Default)]
pub struct SessionContext {
    storage: Option<Arc<FileStorage>>,
}

impl SessionContext {
    /// Context backed by a storage file.
    pub fn with_storage(storage: FileStorage) -> Self {
        Self {
            storage: Some(Arc::new(storage)),
        }
    }

    /// Context with no storage capability.
    pub fn detached() -> Self {
        Self::default()
    }

    fn session(&self) -> SessionStore {
        self.storage.as_ref().map_or_else(SessionStore::detached, |storage| {
            SessionStore::new(Arc::clone(storage) as Arc<dyn KeyValueStorage>)
        })
    }

    fn writable(&self) -> Result<&FileStorage, CliError> {
        self.storage.as_deref().ok_or(CliError::NoStorage)
    }
}

/// Report the current session marker.
///
/// # Errors
///
/// Returns `CliError::Io` if the output cannot be written.
pub fn status(ctx: &SessionContext, out: &mut impl Write) -> Result<(), CliError> {
    let session = ctx.session();

    if !session.has_storage() {
        writeln!(out, "No storage configured: not signed in")?;
        return Ok(());
    }

    match session.current_vendor_email() {
        Some(email) if session.is_authenticated() => writeln!(out, "Signed in as {email}")?,
        Some(_) => writeln!(out, "Not signed in (empty session marker)")?,
        None => writeln!(out, "Not signed in")?,
    }
    Ok(())
}

/// Check credentials and write the session marker.
///
/// # Errors
///
/// Returns `CliError::NoStorage` without a storage file, or `CliError::Auth`
/// if the credentials are rejected or the marker cannot be written.
pub fn sign_in(
    ctx: &SessionContext,
    directory: &VendorDirectory,
    email: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let storage = ctx.writable()?;
    let vendor = services::sign_in(directory, storage, email, password)?;
    writeln!(out, "Signed in as {} ({})", vendor.name, vendor.email)?;
    Ok(())
}

/// Remove the session marker.
///
/// # Errors
///
/// Returns `CliError::NoStorage` without a storage file, or `CliError::Auth`
/// if the marker cannot be removed.
pub fn sign_out(ctx: &SessionContext, out: &mut impl Write) -> Result<(), CliError> {
    let storage = ctx.writable()?;
    services::sign_out(storage)?;
    writeln!(out, "Signed out")?;
    Ok(())
}

/// Run the route guard as a protected view would.
///
/// Returns `true` when the view may render. A detached context has no client
/// to navigate, so the guard is skipped and the check passes.
///
/// # Errors
///
/// Returns `CliError::Io` if the output cannot be written.
pub fn check(ctx: &SessionContext, out: &mut impl Write) -> Result<bool, CliError> {
    let session = ctx.session();

    if !session.has_storage() {
        let guard = RouteGuard::new(session, None);
        let allowed = guard.enforce_authenticated();
        writeln!(out, "No client context: guard skipped")?;
        return Ok(allowed);
    }

    let navigator = Arc::new(RedirectNavigator::default());
    let guard = RouteGuard::new(
        session,
        Some(Arc::clone(&navigator) as Arc<dyn Navigator>),
    );

    if guard.enforce_authenticated() {
        let email = guard.session().current_vendor_email().unwrap_or_default();
        writeln!(out, "Allowed: signed in as {email}")?;
        Ok(true)
    } else {
        let target = navigator.target().unwrap_or_default();
        writeln!(out, "Redirect to {target}")?;
        Ok(false)
    }
}
