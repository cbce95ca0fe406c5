//! Repository metadata age, the freshness signal for the refresh hook

use chrono::{DateTime, Local};
use eolwatch_host_api::MetadataFreshness;
use eolwatch_util::{EolError, Result};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Time since `path` was last modified. A modification time in the future
/// counts as zero age.
pub fn metadata_age(path: impl AsRef<Path>) -> Result<Duration> {
    let path = path.as_ref();
    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| EolError::metadata(format!("{}: {e}", path.display())))?;

    let modified: DateTime<Local> = modified.into();
    let age = Local::now()
        .signed_duration_since(modified)
        .to_std()
        .unwrap_or(Duration::ZERO);

    debug!(path = %path.display(), age_secs = age.as_secs(), "Metadata age");
    Ok(age)
}

/// Freshness of the metadata stored at `path`
pub fn metadata_freshness(path: impl AsRef<Path>) -> Result<MetadataFreshness> {
    metadata_age(path).map(MetadataFreshness::from_age)
}
