//! Use Case Factory
//!
//! Builds use cases with their production dependencies.

use crate::application::ExtractUseCase;
use crate::config::Config;
use crate::infrastructure::{JsonEntrySource, JsonPortalSink};

/// Extract use case reading and writing local JSON files
pub fn create_extract_use_case(config: &Config) -> ExtractUseCase<JsonEntrySource, JsonPortalSink> {
    ExtractUseCase::new(
        JsonEntrySource::new(),
        JsonPortalSink::pretty(config.output.pretty),
    )
}
