//! Configuration loading for Parley.
//!
//! Reads `config.toml` from the data directory (`~/.parley/` by default)
//! and deserializes it into [`AppConfig`]. A missing file means defaults; an
//! unreadable or malformed one is reported to the binary, which falls back
//! to defaults. Command-line flags and environment variables are layered on
//! top by the binary.

use std::path::{Path, PathBuf};

use parley_types::config::AppConfig;
use thiserror::Error;

use crate::sqlite::pool::database_url_for;

/// Resolve the data directory.
///
/// Priority:
/// 1. `PARLEY_DATA_DIR` environment variable
/// 2. `~/.parley` in the user's home directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PARLEY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".parley");
    }

    // Last resort: current directory
    PathBuf::from(".parley")
}

/// Default SQLite URL: `{data_dir}/parley.db`.
pub fn default_database_url(data_dir: &Path) -> String {
    database_url_for(&data_dir.join("parley.db"))
}

/// Why `config.toml` could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error and yields [`AppConfig::default()`].
/// This runs before the tracing subscriber is installed, so failures are
/// returned for the caller to report (and fall back on) once logging is up.
pub async fn load_config(config_path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: config_path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str::<AppConfig>(&content).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}
