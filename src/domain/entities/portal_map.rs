//! Portal map entity
//!
//! The deduplicated `name -> id` mapping a run produces and writes out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered mapping from portal name to its most recently seen identifier.
///
/// Keys keep the position of their first insertion; re-inserting a name only
/// replaces its value. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortalMap {
    portals: Map<String, Value>,
}

impl PortalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `id`, returning the identifier it replaced.
    pub fn insert(&mut self, name: String, id: Value) -> Option<Value> {
        self.portals.insert(name, id)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.portals.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.portals.contains_key(name)
    }

    /// Number of distinct portal names.
    pub fn len(&self) -> usize {
        self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portals.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.portals.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.portals
    }
}

impl From<Map<String, Value>> for PortalMap {
    fn from(portals: Map<String, Value>) -> Self {
        Self { portals }
    }
}

impl From<PortalMap> for Value {
    fn from(map: PortalMap) -> Self {
        Value::Object(map.portals)
    }
}
