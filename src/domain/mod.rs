//! Domain Layer
//!
//! Pure extraction logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The `PortalMap` produced by a run
//! - `value_objects/` - Policy and key types (`MissingIdPolicy`, `portal_key`)
//! - `services/` - The single-pass extractor
//! - `ports/` - Interface definitions for reading entries and writing maps
//!
//! Everything here works on in-memory `serde_json::Value`s. Files are
//! handled by the infrastructure layer through the ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
