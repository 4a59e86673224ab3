//! Portal extractor
//!
//! Single pass over research entries, collecting references into a
//! [`PortalMap`]:
//! - Entries in input order, reference fields in configured order, items in list order
//! - Same name seen again: the later identifier replaces the earlier one
//! - Values of the wrong shape are skipped and counted

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::domain::entities::PortalMap;
use crate::domain::value_objects::{portal_key, MissingIdPolicy};
use crate::error::{PortalError, PortalResult};

/// Reference fields scanned when none are configured, in scan order.
pub const DEFAULT_REFERENCE_FIELDS: [&str; 2] = ["published_in", "connected_to"];

/// Knobs for a single extraction pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Entry fields holding reference lists, scanned in this order
    pub fields: Vec<String>,
    /// What to do with a reference that has `name` but no `id`
    pub missing_id: MissingIdPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            fields: DEFAULT_REFERENCE_FIELDS.iter().map(|f| f.to_string()).collect(),
            missing_id: MissingIdPolicy::default(),
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_missing_id(mut self, policy: MissingIdPolicy) -> Self {
        self.missing_id = policy;
        self
    }
}

/// Counters collected during a pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    /// Top-level entries visited
    pub entries: usize,
    /// References that produced an assignment
    pub references: usize,
    /// Assignments that replaced an existing name
    pub overwritten: usize,
    /// Entries, fields or items skipped for having the wrong shape or no `name`
    pub skipped: usize,
}

/// Result of a pass: the map plus what it took to build it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub portals: PortalMap,
    pub stats: ExtractStats,
}

/// Build the portal map from already-parsed entries.
pub fn extract_portals(entries: &[Value], options: &ExtractOptions) -> PortalResult<Extraction> {
    let mut portals = PortalMap::new();
    let mut stats = ExtractStats::default();

    for (entry_index, entry) in entries.iter().enumerate() {
        stats.entries += 1;

        let Some(entry) = entry.as_object() else {
            debug!(entry = entry_index, "skipping entry that is not an object");
            stats.skipped += 1;
            continue;
        };

        for field in &options.fields {
            let Some(value) = entry.get(field) else {
                continue;
            };
            let Some(items) = value.as_array() else {
                debug!(entry = entry_index, field = %field, "skipping field that is not an array");
                stats.skipped += 1;
                continue;
            };

            for (index, item) in items.iter().enumerate() {
                let Some(reference) = item.as_object() else {
                    trace!(entry = entry_index, field = %field, index, "skipping non-object reference");
                    stats.skipped += 1;
                    continue;
                };
                let Some(name) = reference.get("name") else {
                    trace!(entry = entry_index, field = %field, index, "skipping reference without name");
                    stats.skipped += 1;
                    continue;
                };

                let location = Location {
                    entry: entry_index,
                    field,
                    index,
                };
                let key = portal_key(name).ok_or_else(|| location.invalid_name())?;
                let id = resolve_id(reference, &key, options.missing_id, &location)?;

                stats.references += 1;
                if let Some(previous) = portals.insert(key, id) {
                    stats.overwritten += 1;
                    trace!(
                        entry = entry_index,
                        field = %field,
                        index,
                        %previous,
                        "portal identifier replaced"
                    );
                }
            }
        }
    }

    debug!(
        entries = stats.entries,
        references = stats.references,
        overwritten = stats.overwritten,
        skipped = stats.skipped,
        portals = portals.len(),
        "extraction pass finished"
    );

    Ok(Extraction { portals, stats })
}

struct Location<'a> {
    entry: usize,
    field: &'a str,
    index: usize,
}

impl Location<'_> {
    fn invalid_name(&self) -> PortalError {
        PortalError::InvalidName {
            entry: self.entry,
            field: self.field.to_string(),
            index: self.index,
        }
    }

    fn missing_id(&self, name: &str) -> PortalError {
        PortalError::MissingIdentifier {
            entry: self.entry,
            field: self.field.to_string(),
            index: self.index,
            name: name.to_string(),
        }
    }
}

fn resolve_id(
    reference: &Map<String, Value>,
    name: &str,
    policy: MissingIdPolicy,
    location: &Location<'_>,
) -> PortalResult<Value> {
    match (reference.get("id"), policy) {
        (Some(id), _) => Ok(id.clone()),
        (None, MissingIdPolicy::Null) => {
            debug!(
                entry = location.entry,
                field = location.field,
                index = location.index,
                name,
                "reference has no id, recording null"
            );
            Ok(Value::Null)
        }
        (None, MissingIdPolicy::Strict) => Err(location.missing_id(name)),
    }
}
