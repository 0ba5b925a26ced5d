//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Bandstand using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Bandstand - Instruments HTTP API
#[derive(Parser, Debug)]
#[command(name = "bandstand")]
#[command(version, about, long_about = None)]
#[command(author = "Bandstand Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "bandstand.toml", env = "BANDSTAND_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BANDSTAND_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Instruments API server
    Serve(commands::serve::ServeArgs),

    /// Check connectivity to the configured document store
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["bandstand", "serve"]);
        assert_eq!(cli.config, "bandstand.toml");
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["bandstand", "--config", "custom.toml", "status"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_serve_with_port() {
        let cli = Cli::parse_from(["bandstand", "serve", "--port", "8080"]);
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(8080)),
            _ => panic!("Expected serve command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["bandstand", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }
}
