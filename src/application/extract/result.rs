//! Extract outcome

use std::path::PathBuf;

use crate::domain::entities::PortalMap;
use crate::domain::services::ExtractStats;

/// Result of a completed extract run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOutcome {
    /// The deduplicated map that was (or on dry run would have been) written
    pub portals: PortalMap,
    /// Counters from the extraction pass
    pub stats: ExtractStats,
    /// Where the map was written
    pub output: PathBuf,
    /// False on dry run
    pub written: bool,
}

impl ExtractOutcome {
    /// Number of distinct portal names.
    pub fn count(&self) -> usize {
        super::report(&self.portals)
    }
}
