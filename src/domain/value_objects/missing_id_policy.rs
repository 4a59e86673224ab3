//! Missing Identifier Policy Value Object
//!
//! Decides what happens to a reference that has a `name` but no `id`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Handling of references that carry `name` without `id`
///
/// - `Strict`: abort the run with `MissingIdentifier` (default)
/// - `Null`: record the name with a `null` identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingIdPolicy {
    /// Abort on the first reference without `id`
    #[default]
    Strict,
    /// Map the name to `null`
    Null,
}

impl MissingIdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingIdPolicy::Strict => "strict",
            MissingIdPolicy::Null => "null",
        }
    }
}

impl fmt::Display for MissingIdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingIdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(MissingIdPolicy::Strict),
            "null" => Ok(MissingIdPolicy::Null),
            other => Err(format!(
                "unknown missing-id policy '{other}' (expected 'strict' or 'null')"
            )),
        }
    }
}
