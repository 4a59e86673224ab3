//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod entry_source;
pub mod portal_sink;

pub use entry_source::EntrySource;
pub use portal_sink::PortalSink;
