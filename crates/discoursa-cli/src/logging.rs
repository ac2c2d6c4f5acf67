//! Environment and log filter setup for the binary.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Load a `.env` file, then build the log filter from the environment.
///
/// With no path, `.env` is searched for from the working directory upward.
/// A missing file is not an error. Variables already set in the process
/// environment win over the file.
pub fn load_env(dotenv_path: Option<&Path>) -> EnvFilter {
    let loaded = match dotenv_path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    if let Err(e) = loaded {
        if !e.not_found() {
            eprintln!("Warning: ignoring unreadable .env: {}", e);
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
