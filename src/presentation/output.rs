//! Output Rendering
//!
//! stdout carries exactly one line per run: the count, or a JSON event.

use serde::Serialize;

use crate::application::ExtractOutcome;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare decimal count
    #[default]
    Text,
    /// Single-line JSON event for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Event emitted when an extract run completes.
#[derive(Debug, Clone, Serialize)]
struct ExtractEvent {
    event: &'static str,
    count: usize,
    output: String,
    entries: usize,
    references: usize,
    overwritten: usize,
    skipped: usize,
    dry_run: bool,
    version: &'static str,
}

impl ExtractEvent {
    fn new(outcome: &ExtractOutcome) -> Self {
        Self {
            event: "extract",
            count: outcome.count(),
            output: outcome.output.display().to_string(),
            entries: outcome.stats.entries,
            references: outcome.stats.references,
            overwritten: outcome.stats.overwritten,
            skipped: outcome.stats.skipped,
            dry_run: !outcome.written,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Render the result line (without trailing newline).
pub fn render(outcome: &ExtractOutcome, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.count().to_string()),
        OutputFormat::Json => serde_json::to_string(&ExtractEvent::new(outcome)),
    }
}
