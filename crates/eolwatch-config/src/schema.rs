//! Raw configuration schema (as parsed from TOML)

use serde::Deserialize;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    /// The `[main]` section
    pub main: RawMainConfig,
}

/// Settings in the `[main]` section
#[derive(Debug, Clone, Deserialize)]
pub struct RawMainConfig {
    /// Release-lifecycle API endpoint queried for the EOL status
    pub eol_url: String,
}
