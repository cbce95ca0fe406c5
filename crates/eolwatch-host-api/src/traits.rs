//! Host-facing traits

use eolwatch_util::Result;

use crate::{LifecycleStage, MetadataFreshness, RefreshOutcome};

/// Source of the EOL status for the running release
pub trait StatusSource {
    /// Returns true if the running release has reached end of life.
    ///
    /// Every call performs a fresh lookup; nothing is cached.
    fn eol_status(&self) -> Result<bool>;
}

impl<T: StatusSource + ?Sized> StatusSource for &T {
    fn eol_status(&self) -> Result<bool> {
        (**self).eol_status()
    }
}

/// Hooks the host calls into. The host owns when these run; implementors own
/// what happens.
pub trait LifecycleHooks {
    /// Called after the host refreshed its repository metadata
    fn on_metadata_refreshed(&self, freshness: MetadataFreshness) -> Result<RefreshOutcome>;

    /// Called when the user explicitly asks for the lifecycle stage
    fn on_invoke(&self) -> Result<LifecycleStage>;
}
