//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `factory` - Wires the extract use case to the JSON file adapters
//! - `output` - Renders the result line

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::create_extract_use_case;
pub use output::{render, OutputFormat};
