//! Command-line argument definitions for the Classdraft CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the recognized-text input, the output
//! document, an optional base document to merge into, and logging verbosity.

use clap::Parser;

use classdraft::ImportMode;

/// Command-line arguments for the Classdraft import tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a file holding text recognized from a diagram image
    #[arg(help = "Path to the recognized text file")]
    pub input: String,

    /// Path to the output document JSON file, or `-` for stdout
    #[arg(short, long, default_value = "out.json")]
    pub output: String,

    /// Existing document JSON to combine the extracted document with
    #[arg(short, long)]
    pub base: Option<String>,

    /// How to combine with the base document (merge, replace)
    #[arg(short, long)]
    pub mode: Option<ImportMode>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
