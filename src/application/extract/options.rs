//! Extract request

use std::path::PathBuf;

use crate::domain::services::ExtractOptions;

/// Everything one extract run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    /// JSON file holding the entry array
    pub input: PathBuf,
    /// Destination of the portal map
    pub output: PathBuf,
    /// Field list and missing-id policy
    pub extract: ExtractOptions,
    /// Scan and report without writing `output`
    pub dry_run: bool,
}

impl ExtractRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            extract: ExtractOptions::default(),
            dry_run: false,
        }
    }

    pub fn with_extract_options(mut self, extract: ExtractOptions) -> Self {
        self.extract = extract;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
