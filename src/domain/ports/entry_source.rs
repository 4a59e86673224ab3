//! EntrySource port - where research entries come from
//!
//! Lets the extract use case load entries without knowing about files or
//! JSON parsing.

use std::path::Path;

use serde_json::Value;

use crate::error::PortalResult;

/// Loads the top-level list of research entries
///
/// Implementations must fail with `InputNotFound`, `InputRead`,
/// `MalformedJson` or `NotAnArray` rather than returning a partial list.
pub trait EntrySource {
    fn load_entries(&self, path: &Path) -> PortalResult<Vec<Value>>;
}
