//! Status command implementation
//!
//! Checks connectivity to the configured document store.

use crate::adapters::store::create_store;
use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config_or_default(config_path)?;

        println!("🔍 Checking document store connectivity");
        println!();
        println!("  Backend: {}", config.store_backend);
        println!("  CouchDB URL: {}", config.couchdb.base_url);
        println!("  Database: {}", config.couchdb.database);
        println!();

        let store = create_store(&config)?;

        match store.health_check().await {
            Ok(()) => {
                tracing::info!(backend = store.backend_name(), "Store health check passed");
                println!("✅ Document store is reachable");
                Ok(0)
            }
            Err(e) => {
                tracing::error!(
                    backend = store.backend_name(),
                    error = %e,
                    "Store health check failed"
                );
                println!("❌ Document store is not reachable");
                println!("   Error: {e}");
                Ok(3) // Store-unreachable exit code
            }
        }
    }
}
