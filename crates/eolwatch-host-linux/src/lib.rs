//! Linux host adapter for eolwatch
//!
//! Provides:
//! - `VERSION_ID` lookup in `/etc/os-release`
//! - Blocking lifecycle API client
//! - Repository metadata age probe for the refresh hook

mod metadata;
mod os_release;
mod status;

pub use metadata::*;
pub use os_release::*;
pub use status::*;
