//! Domain Services
//!
//! Stateless operations over in-memory entries.

mod extractor;

pub use extractor::{
    extract_portals, ExtractOptions, ExtractStats, Extraction, DEFAULT_REFERENCE_FIELDS,
};
