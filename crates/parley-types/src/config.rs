//! Configuration types for Parley.
//!
//! `AppConfig` represents the optional `config.toml` in the data directory.
//! Every field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Parley service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite connection string. When unset, `{data_dir}/parley.db` is used.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Log every SQL statement at debug level.
    #[serde(default)]
    pub log_queries: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            log_queries: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(config.database_url.is_none());
        assert!(!config.log_queries);
    }

    #[test]
    fn test_app_config_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("port = 9090\nlog_queries = true\n").unwrap();
        assert_eq!(config.port, 9090);
        assert!(config.log_queries);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_app_config_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
