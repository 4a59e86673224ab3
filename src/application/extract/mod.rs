//! Extract Use Case
//!
//! Orchestrates one run of the portal extractor.
//!
//! This module handles:
//! - Loading entries through an `EntrySource`
//! - Running the domain extractor
//! - Writing the map through a `PortalSink` (skipped on dry run)
//! - Reporting the number of distinct portals

mod options;
mod result;
mod use_case;


pub use options::ExtractRequest;
pub use result::ExtractOutcome;
pub use use_case::{extract, report, write, ExtractUseCase};
