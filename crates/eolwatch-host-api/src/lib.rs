//! Host hook and status source trait interfaces for eolwatch
//!
//! This crate defines the seam between the notifier logic and the
//! platform pieces that read the OS release and talk to the lifecycle API.
//! It contains no platform code itself.

mod freshness;
mod mock;
mod stage;
mod traits;

pub use freshness::*;
pub use mock::*;
pub use stage::*;
pub use traits::*;
