//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{ExtractOptions, DEFAULT_REFERENCE_FIELDS};
use crate::error::PortalResult;

use super::loader;

pub use crate::domain::value_objects::MissingIdPolicy;

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT: &str = "internal_research.json";
/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "all_portals.json";
/// Config file picked up from the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "portalmap.toml";

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// Extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Reference list fields, in scan order
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    #[serde(default)]
    pub missing_id: MissingIdPolicy,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            missing_id: MissingIdPolicy::default(),
        }
    }
}

fn default_fields() -> Vec<String> {
    DEFAULT_REFERENCE_FIELDS
        .iter()
        .map(|f| f.to_string())
        .collect()
}

/// Output file formatting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Values given on the command line; `None`/empty leaves the config alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub fields: Vec<String>,
    pub missing_id: Option<MissingIdPolicy>,
    pub pretty: bool,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> PortalResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Apply command-line values on top of everything else
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(input) = &overrides.input {
            self.paths.input = input.clone();
        }
        if let Some(output) = &overrides.output {
            self.paths.output = output.clone();
        }
        if !overrides.fields.is_empty() {
            self.extract.fields = overrides.fields.clone();
        }
        if let Some(policy) = overrides.missing_id {
            self.extract.missing_id = policy;
        }
        if overrides.pretty {
            self.output.pretty = true;
        }
    }

    /// Options for the domain extractor
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::new()
            .with_fields(self.extract.fields.iter().cloned())
            .with_missing_id(self.extract.missing_id)
    }
}
