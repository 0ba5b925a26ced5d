//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Bandstand configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates on load
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Listen Address: {}:{}",
            config.server.bind_address, config.server.port
        );
        println!("  Store Backend: {}", config.store_backend);
        println!("  CouchDB URL: {}", config.couchdb.base_url);
        println!("  CouchDB Database: {}", config.couchdb.database);
        println!(
            "  CouchDB Auth: {}",
            if config.couchdb.username.is_some() {
                "basic"
            } else {
                "none"
            }
        );
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();

        Ok(0)
    }
}
