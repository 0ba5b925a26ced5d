//! Init command implementation
//!
//! Writes a starter configuration file.

use clap::Args;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "bandstand.toml")]
    pub output: String,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

const STARTER_CONFIG: &str = r#"# Bandstand configuration

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[server]
# The PORT environment variable overrides this value
port = 5000
bind_address = "0.0.0.0"

# Store backend: couchdb or memory
store_backend = "couchdb"

[couchdb]
base_url = "http://localhost:5984"
database = "instruments"
# Uncomment for basic authentication; keep secrets out of the file
# username = "bandstand"
# password = "${BANDSTAND_COUCHDB_PASSWORD}"
timeout_seconds = 30
tls_verify = true

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
local_max_size_mb = 100
"#;

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let path = Path::new(&self.output);

        if path.exists() && !self.force {
            println!("❌ {} already exists (use --force to overwrite)", self.output);
            return Ok(2);
        }

        std::fs::write(path, STARTER_CONFIG)?;

        println!("✅ Wrote starter configuration to {}", self.output);
        println!();
        println!("Next steps:");
        println!("  1. Point [couchdb] at your document store");
        println!("  2. Run: bandstand validate-config --config {}", self.output);
        println!("  3. Run: bandstand serve --config {}", self.output);

        Ok(0)
    }
}
