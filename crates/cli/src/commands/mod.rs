//! CLI command implementations.
//!
//! Commands write their human-readable output to the `out` writer they are
//! given, so tests can capture it.

pub mod session;
pub mod vendors;

use thiserror::Error;

use vendor_portal::services::AuthError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing command output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Sign-in or sign-out failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The command writes the session marker but no storage file was given.
    #[error("No storage configured; pass --storage or set VENDOR_PORTAL_STORAGE")]
    NoStorage,
}
