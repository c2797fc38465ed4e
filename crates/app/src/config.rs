//! Runtime configuration read from environment variables.

use quiver_infrastructure::ImportConfig;
use thiserror::Error;

/// Log filter directive, in `EnvFilter` syntax.
pub const LOG_VAR: &str = "QUIVER_LOG";
/// Maximum size of an imported file, in bytes.
pub const MAX_IMPORT_BYTES_VAR: &str = "QUIVER_MAX_IMPORT_BYTES";
/// Maximum number of elements in an imported file.
pub const MAX_IMPORT_ITEMS_VAR: &str = "QUIVER_MAX_IMPORT_ITEMS";

const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("{var} must be a non-negative integer, got `{value}`")]
    InvalidNumber {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive.
    pub log_filter: String,
    /// Limits applied when reading collection files.
    pub import: ImportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            import: ImportConfig::default(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`; unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }
        if let Some(value) = lookup(MAX_IMPORT_BYTES_VAR) {
            config.import.max_file_size = parse_number(MAX_IMPORT_BYTES_VAR, value)?;
        }
        if let Some(value) = lookup(MAX_IMPORT_ITEMS_VAR) {
            config.import.max_items = parse_number(MAX_IMPORT_ITEMS_VAR, value)?;
        }
        Ok(config)
    }
}

fn parse_number(var: &'static str, value: String) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { var, value })
}
