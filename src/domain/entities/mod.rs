//! Domain Entities
//!
//! - `PortalMap` - Deduplicated portal name to identifier mapping

mod portal_map;

pub use portal_map::PortalMap;
