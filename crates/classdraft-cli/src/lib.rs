//! CLI logic for the Classdraft import tool.
//!
//! This module contains the core CLI logic: reading recognized text,
//! extracting a class diagram document from it and writing the result,
//! optionally merged into an existing document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::{
    fs,
    io::{self, Write as _},
};

use log::info;

use classdraft::{ClassdraftError, Importer, document::Document};

/// Output path that selects standard output.
const STDOUT: &str = "-";

/// Run the Classdraft CLI application
///
/// This function extracts a document from the input text file, combines it
/// with the base document when one is given, and writes the result as
/// pretty-printed JSON.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ClassdraftError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed base documents
pub fn run(args: &Args) -> Result<(), ClassdraftError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing recognized text"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let mode = args.mode.unwrap_or(app_config.import().mode());

    let text = fs::read_to_string(&args.input)?;
    let base = args.base.as_deref().map(read_document).transpose()?;

    let importer = Importer::new(app_config);
    let extraction = importer.extract(&text);
    let document = importer.import(extraction.into_document(), base.as_ref(), mode);

    let json = serde_json::to_string_pretty(&document)?;
    if args.output == STDOUT {
        writeln!(io::stdout().lock(), "{json}")?;
    } else {
        fs::write(&args.output, json + "\n")?;
    }

    info!(
        output_path = args.output,
        entities = document.entities().len(),
        relations = document.relations().len();
        "Document written"
    );

    Ok(())
}

/// Read a stored document from a JSON file.
fn read_document(path: &str) -> Result<Document, ClassdraftError> {
    info!(path; "Reading base document");
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
