mod config;

pub use config::{Config, RosterConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the directory holding `config.toml`.
///
/// Resolution order:
/// - `$RIVALS_HELPER_HOME` if set
/// - `~/.config/rivals-helper-dev/` when `RIVALS_HELPER_ENV=dev`
/// - `~/.config/rivals-helper/`
///
/// The directory is created if it does not exist.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("RIVALS_HELPER_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("RIVALS_HELPER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("rivals-helper-dev")
            } else {
                base_dir.join("rivals-helper")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
