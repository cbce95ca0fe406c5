//! Lifecycle notifier logic for eolwatch
//!
//! Implements the two host hooks on top of any [`eolwatch_host_api::StatusSource`]:
//! - warn after a metadata refresh when the release is EOL
//! - report the lifecycle stage on demand

mod notifier;

pub use notifier::*;
