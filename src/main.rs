//! portalmap CLI
//!
//! Usage: portalmap [--input PATH] [--output PATH] [OPTIONS]
//!
//! Reads research entries, writes the deduplicated portal map and prints the
//! number of distinct portals.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use portalmap::application::ExtractRequest;
use portalmap::config;
use portalmap::logging::{init_tracing, level_for};
use portalmap::presentation::{create_extract_use_case, render, Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(level_for(cli.verbose, cli.quiet));
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = config::load_or_default(cli.config.as_deref(), &cwd)?;
    for warning in &warnings {
        warn!("{warning}");
    }
    config.apply_overrides(&cli.overrides());

    let request = ExtractRequest::new(&config.paths.input, &config.paths.output)
        .with_extract_options(config.extract_options())
        .with_dry_run(cli.dry_run);

    let outcome = create_extract_use_case(&config).execute(&request)?;

    println!(
        "{}",
        render(&outcome, OutputFormat::from_json_flag(cli.json))?
    );
    Ok(())
}
