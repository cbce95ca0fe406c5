//! EOL notifier

use eolwatch_host_api::{
    LifecycleHooks, LifecycleStage, MetadataFreshness, RefreshOutcome, StatusSource,
};
use eolwatch_util::Result;
use tracing::{debug, info, warn};

/// Log target for the lifecycle messages
pub const LOG_TARGET: &str = "eolwatch";

/// Warning emitted after a refresh when the release is EOL
pub const EOL_WARNING: &str =
    "This version of your system has reached its End of Life! You are not receiving any new updates.";

/// Message reporting the lifecycle stage
pub fn lifecycle_message(stage: LifecycleStage) -> String {
    format!("Lifecycle stage of your system: {stage}")
}

/// Notifier behind the refresh hook and the `eol` command
#[derive(Debug)]
pub struct EolNotifier<S> {
    source: S,
}

impl<S: StatusSource> EolNotifier<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Look up the current lifecycle stage without logging it
    pub fn lifecycle_stage(&self) -> Result<LifecycleStage> {
        self.source.eol_status().map(LifecycleStage::from_eol_status)
    }
}

impl<S: StatusSource> LifecycleHooks for EolNotifier<S> {
    fn on_metadata_refreshed(&self, freshness: MetadataFreshness) -> Result<RefreshOutcome> {
        if !freshness.is_fresh() {
            debug!(age_secs = freshness.age.as_secs(), "Metadata not fresh, skipping EOL check");
            return Ok(RefreshOutcome::Skipped);
        }

        if self.lifecycle_stage()?.is_eol() {
            warn!(target: LOG_TARGET, "{}", EOL_WARNING);
            Ok(RefreshOutcome::EolWarned)
        } else {
            Ok(RefreshOutcome::Active)
        }
    }

    fn on_invoke(&self) -> Result<LifecycleStage> {
        let stage = self.lifecycle_stage()?;
        info!(target: LOG_TARGET, "{}", lifecycle_message(stage));
        Ok(stage)
    }
}
