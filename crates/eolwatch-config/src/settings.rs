//! Validated configuration

use crate::schema::RawConfig;

/// Settings read once at startup and passed by reference to the handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EolConfig {
    /// Base URL of the release-lifecycle API
    pub eol_url: String,
}

impl EolConfig {
    pub fn new(eol_url: impl Into<String>) -> Self {
        Self {
            eol_url: eol_url.into(),
        }
    }

    /// Convert a raw config that has already passed validation
    pub fn from_raw(raw: RawConfig) -> Self {
        Self {
            eol_url: raw.main.eol_url.trim().to_string(),
        }
    }
}
