//! Shared utilities for eolwatch
//!
//! This crate provides:
//! - Error types shared by the lookup crates
//! - Default paths for the os-release file and the config file

mod error;
mod paths;

pub use error::*;
pub use paths::*;
