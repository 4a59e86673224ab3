//! JSON Entry Source
//!
//! Reads the research entry file and checks its top-level shape.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::domain::ports::EntrySource;
use crate::error::{PortalError, PortalResult};

/// Loads entries from a JSON file whose top-level value is an array
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEntrySource;

impl JsonEntrySource {
    pub fn new() -> Self {
        Self
    }
}

impl EntrySource for JsonEntrySource {
    fn load_entries(&self, path: &Path) -> PortalResult<Vec<Value>> {
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => PortalError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => PortalError::InputRead {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read input file");

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|source| PortalError::MalformedJson {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Array(entries) => Ok(entries),
            other => Err(PortalError::NotAnArray {
                path: path.to_path_buf(),
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
