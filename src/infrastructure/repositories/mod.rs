//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod entries;
mod portals;

pub use entries::JsonEntrySource;
pub use portals::JsonPortalSink;
