mod config;

pub use config::{Config, DisplayConfig};

use std::path::PathBuf;

/// Returns `~/.config/daycheck[-dev]/` based on DAYCHECK_ENV.
///
/// Set DAYCHECK_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYCHECK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("daycheck-dev")
    } else {
        base_dir.join("daycheck")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
