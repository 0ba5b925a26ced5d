//! Configuration management for Bandstand.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Bandstand uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting (a missing file is a valid config)
//! - Environment variable overrides (`BANDSTAND_*`, plus the bare `PORT`)
//! - Comprehensive validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bandstand::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("bandstand.toml")?;
//!
//! println!("Listening on port {}", config.server.port);
//! println!("Store backend: {}", config.store_backend);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! port = 5000
//! bind_address = "0.0.0.0"
//!
//! store_backend = "couchdb"
//!
//! [couchdb]
//! base_url = "http://localhost:5984"
//! database = "instruments"
//! username = "bandstand"
//! password = "${BANDSTAND_COUCHDB_PASSWORD}"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, BandstandConfig, CouchDbConfig, LoggingConfig, ServerConfig, StoreBackend,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
