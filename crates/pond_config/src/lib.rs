//! Parsing and validation of `pond.toml` simulation configuration files.
//!
//! This crate reads the launch-time parameter block (`spec.md` §6) and
//! produces a strongly-typed [`SimConfig`] with defaults applied and
//! cross-field validation performed.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
