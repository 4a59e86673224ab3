//! PortalSink port - where the finished portal map goes

use std::path::Path;

use crate::domain::entities::PortalMap;
use crate::error::PortalResult;

/// Persists a portal map, creating or replacing the destination
pub trait PortalSink {
    fn write(&self, portals: &PortalMap, path: &Path) -> PortalResult<()>;
}
