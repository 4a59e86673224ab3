//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file helpers (atomic write)
//! - `repositories/` - JSON file implementations of `EntrySource` and `PortalSink`

pub mod fs;
pub mod repositories;

pub use fs::atomic_write;
pub use repositories::{JsonEntrySource, JsonPortalSink};
