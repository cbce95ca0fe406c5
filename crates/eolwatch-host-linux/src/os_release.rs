//! Reads the running release's version from os-release

use eolwatch_util::{EolError, Result};
use std::path::Path;
use tracing::debug;

const VERSION_ID_PREFIX: &str = "VERSION_ID=";

/// Read and parse `VERSION_ID` from an os-release file
pub fn read_version_id(path: impl AsRef<Path>) -> Result<u32> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| EolError::os_release(path, e))?;

    let version = parse_version_id(&content)?;
    debug!(path = %path.display(), version, "Read VERSION_ID");
    Ok(version)
}

/// Parse `VERSION_ID` from os-release content.
///
/// The first line starting with `VERSION_ID=` wins. A value wrapped in a
/// matching pair of quotes is unquoted before parsing.
pub fn parse_version_id(content: &str) -> Result<u32> {
    let raw = content
        .lines()
        .find_map(|line| line.strip_prefix(VERSION_ID_PREFIX))
        .ok_or(EolError::MissingVersionId)?
        .trim();

    unquote(raw)
        .parse::<u32>()
        .map_err(|_| EolError::InvalidVersionId(raw.to_string()))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
