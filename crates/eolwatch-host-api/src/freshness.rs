//! Metadata freshness signal supplied by the host

use std::time::Duration;

/// Metadata younger than this counts as just refreshed
pub const FRESH_METADATA_MAX_AGE: Duration = Duration::from_secs(100);

/// How recently the host refreshed its repository metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataFreshness {
    pub age: Duration,
}

impl MetadataFreshness {
    pub fn from_age(age: Duration) -> Self {
        Self { age }
    }

    pub fn from_age_secs(secs: u64) -> Self {
        Self::from_age(Duration::from_secs(secs))
    }

    /// Whether the metadata was refreshed recently enough to run the check
    pub fn is_fresh(&self) -> bool {
        self.age < FRESH_METADATA_MAX_AGE
    }
}
