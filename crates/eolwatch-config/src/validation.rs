//! Configuration validation

use crate::schema::RawConfig;
use thiserror::Error;
use url::Url;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("main.eol_url cannot be empty")]
    EmptyUrl,

    #[error("main.eol_url '{value}' is not a valid URL: {message}")]
    InvalidUrl { value: String, message: String },

    #[error("main.eol_url '{value}' uses unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { value: String, scheme: String },
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let value = config.main.eol_url.trim();
    if value.is_empty() {
        errors.push(ValidationError::EmptyUrl);
        return errors;
    }

    match Url::parse(value) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::UnsupportedScheme {
                    value: value.to_string(),
                    scheme: url.scheme().to_string(),
                });
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUrl {
            value: value.to_string(),
            message: e.to_string(),
        }),
    }

    errors
}
