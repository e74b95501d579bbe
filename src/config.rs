//! Configuration management for the contact book server.
//!
//! This module handles loading and validating configuration from environment
//! variables, with a `.env` file picked up when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite document store (default: "contacts.db")
    pub db_path: PathBuf,

    /// Socket address to bind the HTTP server to (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DB_PATH`: SQLite database path (default: "contacts.db")
    /// - `BIND_ADDR`: listen address (default: "127.0.0.1:3000")
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let db_path = env::var("CONTACTS_DB_PATH").unwrap_or_else(|_| "contacts.db".to_string());

        if db_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DB_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bind_addr = Self::parse_env_addr("BIND_ADDR", "127.0.0.1:3000")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            db_path: PathBuf::from(db_path),
            bind_addr,
            log_level,
        })
    }

    /// Parse an environment variable as a socket address with a default value.
    fn parse_env_addr(var_name: &str, default: &str) -> ConfigResult<SocketAddr> {
        let raw = env::var(var_name).unwrap_or_else(|_| default.to_string());
        raw.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be a socket address like 127.0.0.1:3000, got: {}", raw),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from("contacts.db"),
            bind_addr: "127.0.0.1:3000".parse().expect("default bind address"),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from("contacts.db"));
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("CONTACTS_DB_PATH");
        env::remove_var("BIND_ADDR");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.db_path, PathBuf::from("contacts.db"));
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_DB_PATH", "/tmp/contacts-test.db");
        guard.set("BIND_ADDR", "0.0.0.0:8080");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/contacts-test.db"));
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_addr() {
        let mut guard = EnvGuard::new();
        guard.set("BIND_ADDR", "not-an-address");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "BIND_ADDR");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_db_path() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_DB_PATH", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACTS_DB_PATH");
        }
    }
}
