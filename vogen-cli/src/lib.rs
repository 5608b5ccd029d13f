//! # vogen-cli
//!
//! CLI library for generating Go value objects from `vogen.toml`
//! definition files.
//!
//! ## Architecture
//!
//! - [`config`] - Definition file loading and CLI overrides
//! - [`generator`] - Drives the [`vogen`] engine against the file system
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::ValueObjectGenerator;
