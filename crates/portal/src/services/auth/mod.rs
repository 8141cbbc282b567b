//! Vendor sign-in and sign-out.
//!
//! These are the only writers of the session marker. Sign-in checks the
//! submitted credentials against the [`VendorDirectory`] and, on success,
//! stores the vendor's email under [`SESSION_MARKER_KEY`]. Nothing else is
//! issued: no token, no expiry, no signature.

mod error;

pub use error::AuthError;

use vendor_portal_core::{Email, KeyValueStorage, SESSION_MARKER_KEY, Vendor};

use crate::services::vendors::VendorDirectory;

/// Check credentials against the directory without touching any storage.
///
/// The password is checked before the active flag so an inactive account is
/// only revealed to someone who knows its password.
///
/// # Errors
///
/// Returns `AuthError::InvalidEmail` if the email is malformed,
/// `AuthError::InvalidCredentials` for an unknown email or wrong password,
/// and `AuthError::InactiveVendor` for a deactivated vendor.
pub fn authenticate<'a>(
    directory: &'a VendorDirectory,
    email: &str,
    password: &str,
) -> Result<&'a Vendor, AuthError> {
    let email = Email::parse(email.trim())?;

    let vendor = directory
        .find_by_email(email.as_str())
        .ok_or(AuthError::InvalidCredentials)?;

    if !vendor.password_matches(password) {
        return Err(AuthError::InvalidCredentials);
    }

    if !vendor.active {
        return Err(AuthError::InactiveVendor);
    }

    Ok(vendor)
}

/// Check credentials and write the session marker.
///
/// # Errors
///
/// Returns the errors of [`authenticate`], and `AuthError::Storage` if the
/// marker cannot be written.
pub fn sign_in<'a>(
    directory: &'a VendorDirectory,
    storage: &dyn KeyValueStorage,
    email: &str,
    password: &str,
) -> Result<&'a Vendor, AuthError> {
    let vendor = authenticate(directory, email, password)?;

    storage.set(SESSION_MARKER_KEY, vendor.email.as_str())?;
    tracing::info!(vendor_id = %vendor.id, "Vendor signed in");

    Ok(vendor)
}

/// Remove the session marker.
///
/// Signing out without a session is a no-op.
///
/// # Errors
///
/// Returns `AuthError::Storage` if the marker cannot be removed.
pub fn sign_out(storage: &dyn KeyValueStorage) -> Result<(), AuthError> {
    storage.delete(SESSION_MARKER_KEY)?;
    tracing::info!("Vendor signed out");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use vendor_portal_core::{MemoryStorage, SessionStore};

    use super::*;

    fn setup() -> (VendorDirectory, Arc<MemoryStorage>, SessionStore) {
        let storage = Arc::new(MemoryStorage::new());
        let session = SessionStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStorage>);
        (VendorDirectory::fixture(), storage, session)
    }

    #[test]
    fn test_sign_in_writes_marker() {
        let (directory, storage, session) = setup();

        let vendor = sign_in(&directory, &*storage, "oxsportshop@gmail.com", "oxsport123")
            .unwrap();

        assert_eq!(vendor.name, "OX Sport Shop");
        assert!(session.is_authenticated());
        assert_eq!(
            session.current_vendor_email().as_deref(),
            Some("oxsportshop@gmail.com")
        );
    }

    #[test]
    fn test_sign_in_stores_directory_email_not_input() {
        let (directory, storage, session) = setup();

        sign_in(&directory, &*storage, "  OXSPORTSHOP@gmail.com ", "oxsport123").unwrap();

        assert_eq!(
            session.current_vendor_email().as_deref(),
            Some("oxsportshop@gmail.com")
        );
    }

    #[test]
    fn test_sign_in_wrong_password() {
        let (directory, storage, session) = setup();

        let err = sign_in(&directory, &*storage, "oxsportshop@gmail.com", "nope")
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_sign_in_unknown_vendor() {
        let (directory, storage, _) = setup();

        let err = sign_in(&directory, &*storage, "nobody@example.com", "x").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_sign_in_malformed_email() {
        let (directory, storage, _) = setup();

        let err = sign_in(&directory, &*storage, "not-an-email", "x").unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[test]
    fn test_sign_in_inactive_vendor() {
        let (directory, storage, session) = setup();

        let err = sign_in(
            &directory,
            &*storage,
            "contact@urbanthreads.store",
            "urbanthreads123",
        )
        .unwrap_err();

        assert!(matches!(err, AuthError::InactiveVendor));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_inactive_vendor_with_wrong_password_is_invalid_credentials() {
        let (directory, storage, _) = setup();

        let err = sign_in(&directory, &*storage, "contact@urbanthreads.store", "guess")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_sign_in_overwrites_previous_marker() {
        let (directory, storage, session) = setup();

        sign_in(&directory, &*storage, "oxsportshop@gmail.com", "oxsport123").unwrap();
        sign_in(&directory, &*storage, "sunrisebakery@gmail.com", "sunrise123").unwrap();

        assert_eq!(
            session.current_vendor_email().as_deref(),
            Some("sunrisebakery@gmail.com")
        );
    }

    #[test]
    fn test_authenticate_leaves_storage_alone() {
        let (directory, storage, session) = setup();

        let vendor = authenticate(&directory, "hello@harborcoffee.co", "harbor123").unwrap();

        assert_eq!(vendor.name, "Harbor Coffee Roasters");
        assert!(!session.is_authenticated());
        assert_eq!(storage.get(SESSION_MARKER_KEY), None);
    }

    #[test]
    fn test_sign_out_clears_marker() {
        let (directory, storage, session) = setup();

        sign_in(&directory, &*storage, "oxsportshop@gmail.com", "oxsport123").unwrap();
        sign_out(&*storage).unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.current_vendor_email(), None);

        // Signing out twice is fine
        assert!(sign_out(&*storage).is_ok());
    }
}
