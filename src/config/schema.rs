//! Configuration schema types
//!
//! This module defines the configuration structure for Bandstand. Every
//! section has serde defaults so a missing or minimal TOML file still
//! yields a runnable configuration (the `PORT` environment variable is the
//! only knob most deployments touch).

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// CouchDB-compatible document store over REST
    #[default]
    Couchdb,
    /// In-memory store (development and integration tests)
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Couchdb => write!(f, "couchdb"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "couchdb" => Ok(StoreBackend::Couchdb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!(
                "Unsupported store backend '{other}'. Supported backends: couchdb, memory"
            )),
        }
    }
}

/// Main Bandstand configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BandstandConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Store backend (couchdb or memory)
    #[serde(default)]
    pub store_backend: StoreBackend,

    /// CouchDB connection settings (used when store_backend = couchdb)
    #[serde(default)]
    pub couchdb: CouchDbConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BandstandConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.server.validate()?;

        // Only the active backend's section is validated; both may be
        // present in the file.
        if self.store_backend == StoreBackend::Couchdb {
            self.couchdb.validate()?;
        }

        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
        }
    }
}

impl ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.bind_address.trim().is_empty() {
            return Err("server.bind_address cannot be empty".to_string());
        }
        Ok(())
    }
}

/// CouchDB connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouchDbConfig {
    /// Base URL of the CouchDB server
    #[serde(default = "default_couchdb_base_url")]
    pub base_url: String,

    /// Database holding the instrument documents
    #[serde(default = "default_couchdb_database")]
    pub database: String,

    /// Username for basic authentication (optional)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for basic authentication (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
}

impl Default for CouchDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_couchdb_base_url(),
            database: default_couchdb_database(),
            username: None,
            password: None,
            timeout_seconds: default_timeout_seconds(),
            tls_verify: default_tls_verify(),
        }
    }
}

impl CouchDbConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "couchdb.base_url must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if self.database.trim().is_empty() {
            return Err("couchdb.database cannot be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("couchdb.timeout_seconds must be non-zero".to_string());
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(
                "couchdb.username and couchdb.password must be set together".to_string(),
            );
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to a local rolling file
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for the rolling log file
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,

    /// Maximum log size in megabytes
    #[serde(default = "default_log_max_size_mb")]
    pub local_max_size_mb: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
            local_max_size_mb: default_log_max_size_mb(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_couchdb_base_url() -> String {
    "http://localhost:5984".to_string()
}

fn default_couchdb_database() -> String {
    "instruments".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_tls_verify() -> bool {
    true
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

fn default_log_max_size_mb() -> u64 {
    100
}
