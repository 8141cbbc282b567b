//! Vendor directory commands.
//!
//! # Usage
//!
//! ```bash
//! vp-cli vendors list
//! ```

use std::io::Write;

use vendor_portal::services::VendorDirectory;

use super::CliError;

/// Print every vendor in the directory. Passwords are never shown.
///
/// # Errors
///
/// Returns `CliError::Io` if the output cannot be written.
pub fn list(directory: &VendorDirectory, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{:<4} {:<26} {:<34} STATUS", "ID", "NAME", "EMAIL")?;
    for vendor in directory.iter() {
        writeln!(
            out,
            "{:<4} {:<26} {:<34} {}",
            vendor.id.as_str(),
            vendor.name,
            vendor.email.as_str(),
            vendor.status_label()
        )?;
    }
    writeln!(
        out,
        "{} vendors, {} active",
        directory.len(),
        directory.active_count()
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shows_every_vendor_without_passwords() {
        let mut out = Vec::new();
        list(&VendorDirectory::fixture(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("OX Sport Shop"));
        assert!(out.contains("contact@urbanthreads.store"));
        assert!(out.contains("Inactive"));
        assert!(out.contains("5 vendors, 4 active"));
        assert!(!out.contains("oxsport123"));
    }
}
