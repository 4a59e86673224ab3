//! portalmap - portal reference extraction for research entry dumps
//!
//! Reads a JSON array of research entries, collects the `name -> id` pairs
//! found in each entry's `published_in` and `connected_to` lists (later
//! occurrences win), writes the result as a flat JSON object and reports how
//! many distinct portals were found.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{extract, report, write, ExtractOutcome, ExtractRequest, ExtractUseCase};
pub use config::Config;
pub use domain::entities::PortalMap;
pub use domain::services::{extract_portals, ExtractOptions, ExtractStats, Extraction};
pub use domain::value_objects::MissingIdPolicy;
pub use error::{PortalError, PortalResult};
