//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ExtractUseCase` - Read entries, extract portals, write the map, report the count

pub mod extract;

pub use extract::{extract, report, write, ExtractOutcome, ExtractRequest, ExtractUseCase};
