//! Config validation CLI tool
//!
//! Usage: `validate-config [config-file]`. Without an argument the default
//! config path is checked (`$EOLWATCH_CONFIG` or `/etc/eolwatch/eol.conf`).

use eolwatch_config::{ConfigError, load_config};
use eolwatch_util::config_path_or_default;
use std::path::PathBuf;
use std::process::ExitCode;

fn report_error(err: &ConfigError) {
    match err {
        ConfigError::ReadError(io_err) => eprintln!("Failed to read file: {}", io_err),
        ConfigError::ParseError(parse_err) => {
            eprintln!("TOML parse error:");
            eprintln!("  {}", parse_err);
        }
        ConfigError::ValidationFailed { errors } => {
            eprintln!("Validation errors ({}):", errors.len());
            for err in errors {
                eprintln!("  - {}", err);
            }
        }
    }
}

fn main() -> ExitCode {
    let config_path = config_path_or_default(std::env::args_os().nth(1).map(PathBuf::from));

    match load_config(&config_path) {
        Ok(config) => {
            println!("✓ {} is valid", config_path.display());
            println!("  eol_url: {}", config.eol_url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {} is not a valid eolwatch config", config_path.display());
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
