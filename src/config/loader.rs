//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{BandstandConfig, StoreBackend};
use crate::config::secret_string;
use crate::domain::errors::BandstandError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BandstandConfig
/// 4. Applies environment variable overrides (BANDSTAND_* prefix, plus PORT)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use bandstand::config::load_config;
///
/// let config = load_config("bandstand.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BandstandConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BandstandError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BandstandError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration, falling back to defaults when the file is missing
///
/// Deployments that only set `PORT` don't carry a TOML file at all; the
/// defaults plus environment overrides are a complete configuration.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<BandstandConfig> {
    let path = path.as_ref();

    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults with environment overrides"
    );

    let mut config = BandstandConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        BandstandError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn parse_config(contents: &str) -> Result<BandstandConfig> {
    // Perform environment variable substitution
    let contents = substitute_env_vars(contents)?;

    // Parse TOML
    let mut config: BandstandConfig = toml::from_str(&contents)
        .map_err(|e| BandstandError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config)?;

    // Validate configuration
    config.validate().map_err(|e| {
        BandstandError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("substitution pattern is valid");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(BandstandError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// `PORT` is applied first (the single knob named by the deployment
/// contract); the more specific `BANDSTAND_*` variables win over it.
fn apply_env_overrides(config: &mut BandstandConfig) -> Result<()> {
    if let Ok(val) = std::env::var("PORT") {
        config.server.port = val.parse().map_err(|_| {
            BandstandError::Configuration(format!("PORT must be a valid port number, got '{val}'"))
        })?;
    }

    if let Ok(val) = std::env::var("BANDSTAND_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("BANDSTAND_SERVER_PORT") {
        config.server.port = val.parse().map_err(|_| {
            BandstandError::Configuration(format!(
                "BANDSTAND_SERVER_PORT must be a valid port number, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("BANDSTAND_SERVER_BIND_ADDRESS") {
        config.server.bind_address = val;
    }

    if let Ok(val) = std::env::var("BANDSTAND_STORE_BACKEND") {
        config.store_backend = val
            .parse::<StoreBackend>()
            .map_err(BandstandError::Configuration)?;
    }

    if let Ok(val) = std::env::var("BANDSTAND_COUCHDB_BASE_URL") {
        config.couchdb.base_url = val;
    }
    if let Ok(val) = std::env::var("BANDSTAND_COUCHDB_DATABASE") {
        config.couchdb.database = val;
    }
    if let Ok(val) = std::env::var("BANDSTAND_COUCHDB_USERNAME") {
        config.couchdb.username = Some(val);
    }
    if let Ok(val) = std::env::var("BANDSTAND_COUCHDB_PASSWORD") {
        config.couchdb.password = Some(secret_string(val));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_var() {
        std::env::set_var("BANDSTAND_TEST_SUB_VAR", "substituted");
        let input = "value = \"${BANDSTAND_TEST_SUB_VAR}\"";
        let output = substitute_env_vars(input).unwrap();
        assert_eq!(output, "value = \"substituted\"\n");
        std::env::remove_var("BANDSTAND_TEST_SUB_VAR");
    }

    #[test]
    fn test_substitute_missing_var_errors() {
        let input = "value = \"${BANDSTAND_TEST_DEFINITELY_UNSET}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("BANDSTAND_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# password = \"${BANDSTAND_TEST_COMMENTED_VAR}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${BANDSTAND_TEST_COMMENTED_VAR}"));
    }

    #[test]
    fn test_parse_minimal_config() {
        std::env::remove_var("PORT");
        std::env::remove_var("BANDSTAND_SERVER_PORT");
        let config = parse_config("").unwrap();
        assert_eq!(config.server.port, 5000);
    }
}
