//! Vendor portal CLI - vendor directory and session inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # List the vendor directory
//! vp-cli vendors list
//!
//! # Sign in against a storage file
//! vp-cli session sign-in -e oxsportshop@gmail.com -p oxsport123 --storage session.json
//!
//! # Run the route guard (exit code 1 on redirect)
//! vp-cli session check --storage session.json
//! ```
//!
//! # Commands
//!
//! - `vendors list` - Print the vendor directory
//! - `session status` - Show the current session marker
//! - `session sign-in` / `session sign-out` - Write or clear the marker
//! - `session check` - Run the route guard
//!
//! # Environment Variables
//!
//! - `VENDOR_PORTAL_STORAGE` - Storage file, used when `--storage` is absent

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use vendor_portal::services::VendorDirectory;

mod commands;
mod storage;

use commands::CliError;
use commands::session::SessionContext;
use storage::FileStorage;

#[derive(Parser)]
#[command(name = "vp-cli")]
#[command(author, version, about = "Vendor portal CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the vendor directory
    Vendors {
        #[command(subcommand)]
        action: VendorAction,
    },
    /// Inspect or change the session marker
    Session {
        /// JSON file holding the session marker
        #[arg(long, global = true, env = "VENDOR_PORTAL_STORAGE")]
        storage: Option<PathBuf>,

        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum VendorAction {
    /// List all vendors
    List,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Show the current session marker
    Status,
    /// Check credentials and write the session marker
    SignIn {
        /// Vendor email address
        #[arg(short, long)]
        email: String,

        /// Vendor password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the session marker
    SignOut,
    /// Run the route guard; exits with status 1 when it redirects
    Check,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; command output owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match run(cli, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::from(2)
        }
    }
}

/// Run a command. `Ok(false)` means the route guard redirected.
fn run(cli: Cli, out: &mut impl Write) -> Result<bool, CliError> {
    let directory = VendorDirectory::fixture();

    match cli.command {
        Commands::Vendors { action } => match action {
            VendorAction::List => commands::vendors::list(&directory, out)?,
        },
        Commands::Session { storage, action } => {
            let ctx = storage.map_or_else(SessionContext::detached, |path| {
                SessionContext::with_storage(FileStorage::new(path))
            });

            match action {
                SessionAction::Status => commands::session::status(&ctx, out)?,
                SessionAction::SignIn { email, password } => {
                    commands::session::sign_in(&ctx, &directory, &email, &password, out)?;
                }
                SessionAction::SignOut => commands::session::sign_out(&ctx, out)?,
                SessionAction::Check => return commands::session::check(&ctx, out),
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vp-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_session_round_trip_through_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let path = path.to_str().unwrap();
        let mut out = Vec::new();

        assert!(!run(parse(&["session", "check", "--storage", path]), &mut out).unwrap());

        let sign_in = parse(&[
            "session",
            "sign-in",
            "-e",
            "oxsportshop@gmail.com",
            "-p",
            "oxsport123",
            "--storage",
            path,
        ]);
        assert!(run(sign_in, &mut out).unwrap());
        assert!(run(parse(&["session", "check", "--storage", path]), &mut out).unwrap());

        assert!(run(parse(&["session", "sign-out", "--storage", path]), &mut out).unwrap());
        assert!(!run(parse(&["session", "check", "--storage", path]), &mut out).unwrap());
    }

    #[test]
    fn test_vendors_list_through_run() {
        let mut out = Vec::new();
        assert!(run(parse(&["vendors", "list"]), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("Sunrise Bakery"));
    }
}
