//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::SimConfig;

/// Loads and validates a `pond.toml` configuration from a file path.
pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `pond.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies, and for the default
/// (empty-file) configuration used when no config path is given.
pub fn load_config_from_str(content: &str) -> Result<SimConfig, ConfigError> {
    let config: SimConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates cross-field invariants that `serde`'s per-field defaults cannot express.
fn validate_config(config: &SimConfig) -> Result<(), ConfigError> {
    if config.pond_depth == 0 || config.pond_depth % 16 != 0 {
        return Err(ConfigError::ValidationError(
            "pond_depth must be a positive multiple of 16".to_string(),
        ));
    }
    if config.pond_size_x == 0 || config.pond_size_y == 0 {
        return Err(ConfigError::ValidationError(
            "pond_size_x and pond_size_y must be nonzero".to_string(),
        ));
    }
    if config.exec_start_inst >= config.pond_depth {
        return Err(ConfigError::ValidationError(
            "exec_start_inst must be less than pond_depth".to_string(),
        ));
    }
    Ok(())
}
