//! Lifecycle stage and hook outcomes

use std::fmt;

/// Lifecycle stage of the running release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    /// No active release matches the running version
    Eol,
    /// The running version is still maintained
    Active,
}

impl LifecycleStage {
    pub fn from_eol_status(eol: bool) -> Self {
        if eol { Self::Eol } else { Self::Active }
    }

    pub fn is_eol(&self) -> bool {
        matches!(self, Self::Eol)
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eol => f.write_str("EOL"),
            Self::Active => f.write_str("Active"),
        }
    }
}

/// What the metadata-refreshed hook did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Metadata was not fresh; the status was not queried
    Skipped,
    /// Status queried, release still active; nothing logged
    Active,
    /// Status queried, release is EOL; warning emitted
    EolWarned,
}
