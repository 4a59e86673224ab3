//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! There are no subcommands: a run always extracts. Flags left unset fall
//! back to environment variables, then the config file, then defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{CliOverrides, MissingIdPolicy};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingIdArg {
    /// Abort when a named reference has no id
    Strict,
    /// Record the name with a null id
    Null,
}

impl From<MissingIdArg> for MissingIdPolicy {
    fn from(arg: MissingIdArg) -> Self {
        match arg {
            MissingIdArg::Strict => MissingIdPolicy::Strict,
            MissingIdArg::Null => MissingIdPolicy::Null,
        }
    }
}

/// portalmap - collect portal references from research entries
#[derive(Parser, Debug)]
#[command(name = "portalmap")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Writes the portal map and prints the number of distinct portals.\nEnvironment: PORTALMAP_INPUT, PORTALMAP_OUTPUT, PORTALMAP_FIELDS, PORTALMAP_MISSING_ID, PORTALMAP_PRETTY"
)]
pub struct Cli {
    /// JSON file containing the array of research entries
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the portal map
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./portalmap.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reference list fields to scan, in order (repeatable or comma-separated)
    #[arg(long = "field", value_name = "NAME", value_delimiter = ',')]
    pub fields: Vec<String>,

    /// How to treat a reference that has a name but no id
    #[arg(long, value_enum, value_name = "POLICY")]
    pub missing_id: Option<MissingIdArg>,

    /// Indent the output file
    #[arg(long)]
    pub pretty: bool,

    /// Scan and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON event instead of the bare count
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            input: self.input.clone(),
            output: self.output.clone(),
            fields: self.fields.clone(),
            missing_id: self.missing_id.map(Into::into),
            pretty: self.pretty,
        }
    }
}
