//! Configuration parsing and validation for eolwatch
//!
//! The config file is TOML with a single recognized option:
//!
//! ```toml
//! [main]
//! eol_url = "https://pdc.fedoraproject.org/rest_api/v1/releases/"
//! ```

mod schema;
mod settings;
mod validation;

pub use schema::*;
pub use settings::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and validate configuration from a file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<EolConfig> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading config");
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<EolConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let errors = validate_config(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(EolConfig::from_raw(raw))
}
