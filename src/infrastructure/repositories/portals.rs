//! JSON Portal Sink
//!
//! Writes the portal map as a flat JSON object.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::PortalMap;
use crate::domain::ports::PortalSink;
use crate::error::{PortalError, PortalResult};
use crate::infrastructure::fs::atomic_write;

/// Writes portal maps to JSON files, compact unless `pretty` is set
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPortalSink {
    pretty: bool,
}

impl JsonPortalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render(&self, portals: &PortalMap) -> PortalResult<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(portals)?
        } else {
            serde_json::to_vec(portals)?
        };
        Ok(bytes)
    }
}

impl PortalSink for JsonPortalSink {
    fn write(&self, portals: &PortalMap, path: &Path) -> PortalResult<()> {
        let content = self.render(portals)?;

        atomic_write(path, &content).map_err(|source| PortalError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), portals = portals.len(), "wrote portal map");

        Ok(())
    }
}
