//! Serve command implementation
//!
//! Runs the Instruments API server until a shutdown signal arrives.

use crate::adapters::store::create_store;
use crate::config::load_config_or_default;
use crate::http;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the listening port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        mut shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let mut config = load_config_or_default(config_path)?;
        if let Some(port) = self.port {
            config.server.port = port;
        }

        let store = create_store(&config)?;

        tracing::info!(
            backend = store.backend_name(),
            port = config.server.port,
            "Starting Instruments API"
        );

        let shutdown = async move {
            // Resolves when the signal task flips the channel; a closed
            // channel also stops the server rather than leaving it orphaned.
            let _ = shutdown_signal.wait_for(|stop| *stop).await;
            tracing::info!("Shutting down Instruments API");
        };

        http::serve(&config, store, shutdown).await?;

        Ok(0)
    }
}
