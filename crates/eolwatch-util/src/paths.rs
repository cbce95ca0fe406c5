//! Default paths for eolwatch components
//!
//! - os-release: `/etc/os-release`
//! - Config: `$EOLWATCH_CONFIG` or `/etc/eolwatch/eol.conf`

use std::path::PathBuf;

/// Environment variable for overriding the config file path
pub const EOLWATCH_CONFIG_ENV: &str = "EOLWATCH_CONFIG";

/// File describing the running OS release
pub const DEFAULT_OS_RELEASE_PATH: &str = "/etc/os-release";

/// Config file location when no override is given
const DEFAULT_CONFIG_PATH: &str = "/etc/eolwatch/eol.conf";

/// Get the default config path.
///
/// Order of precedence:
/// 1. `$EOLWATCH_CONFIG` environment variable (if set)
/// 2. `/etc/eolwatch/eol.conf`
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(EOLWATCH_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    config_path_without_env()
}

/// Get the config path without checking EOLWATCH_CONFIG.
/// Used for clap defaults where the env var is wired separately.
pub fn config_path_without_env() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

/// Use `explicit` when given, otherwise [`default_config_path`]
pub fn config_path_or_default(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(default_config_path)
}

/// Get the default os-release path
pub fn default_os_release_path() -> PathBuf {
    PathBuf::from(DEFAULT_OS_RELEASE_PATH)
}
