//! Configuration module for portalmap
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PORTALMAP_*)
//! 3. Config file (`--config`, else ./portalmap.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! Relative paths are resolved against the working directory, not the
//! config file.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, with_env_overrides_from};
pub use types::{
    CliOverrides, Config, ExtractConfig, MissingIdPolicy, OutputConfig, PathsConfig,
    CONFIG_FILE_NAME, DEFAULT_INPUT, DEFAULT_OUTPUT,
};
