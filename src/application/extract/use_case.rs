//! Extract Use Case
//!
//! read -> extract -> write -> report, stopping at the first error.

use std::path::Path;

use tracing::info;

use crate::domain::entities::PortalMap;
use crate::domain::ports::{EntrySource, PortalSink};
use crate::domain::services::{extract_portals, ExtractOptions, Extraction};
use crate::error::PortalResult;
use crate::infrastructure::{JsonEntrySource, JsonPortalSink};

use super::options::ExtractRequest;
use super::result::ExtractOutcome;

/// Extract use case - builds the portal map for one input file
pub struct ExtractUseCase<ES, PS>
where
    ES: EntrySource,
    PS: PortalSink,
{
    source: ES,
    sink: PS,
}

impl<ES, PS> ExtractUseCase<ES, PS>
where
    ES: EntrySource,
    PS: PortalSink,
{
    pub fn new(source: ES, sink: PS) -> Self {
        Self { source, sink }
    }

    /// Run the extraction described by `request`.
    ///
    /// Nothing is written unless the whole input was scanned without error.
    pub fn execute(&self, request: &ExtractRequest) -> PortalResult<ExtractOutcome> {
        let entries = self.source.load_entries(&request.input)?;
        info!(
            input = %request.input.display(),
            entries = entries.len(),
            "loaded research entries"
        );

        let Extraction { portals, stats } = extract_portals(&entries, &request.extract)?;
        info!(
            portals = portals.len(),
            references = stats.references,
            overwritten = stats.overwritten,
            skipped = stats.skipped,
            "extracted portals"
        );

        let written = if request.dry_run {
            info!(output = %request.output.display(), "dry run, output not written");
            false
        } else {
            self.sink.write(&portals, &request.output)?;
            info!(output = %request.output.display(), "portal map written");
            true
        };

        Ok(ExtractOutcome {
            portals,
            stats,
            output: request.output.clone(),
            written,
        })
    }
}

/// Load `input` from disk and extract its portal map.
pub fn extract(input: &Path, options: &ExtractOptions) -> PortalResult<Extraction> {
    let entries = JsonEntrySource::new().load_entries(input)?;
    extract_portals(&entries, options)
}

/// Write `portals` to `output` as a compact JSON object.
pub fn write(portals: &PortalMap, output: &Path) -> PortalResult<()> {
    JsonPortalSink::new().write(portals, output)
}

/// Number of distinct portal names in `portals`.
pub fn report(portals: &PortalMap) -> usize {
    portals.len()
}
