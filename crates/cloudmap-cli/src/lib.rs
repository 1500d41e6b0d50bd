//! CLI logic for the Cloudmap importer.
//!
//! This module contains the core CLI logic: read a Dia file, resolve it and
//! write the Cloudmap JSON model to a file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use cloudmap::{CloudmapError, ImportBuilder};

/// Run the Cloudmap CLI application
///
/// This function processes the input file through the import pipeline and
/// writes the resulting JSON to the output file, or to stdout when no output
/// file is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CloudmapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), CloudmapError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::resolve_config(args)?;

    // Read input file
    let bytes = fs::read(&args.input)?;

    // Import using the ImportBuilder API
    let builder = ImportBuilder::new(app_config);
    let primitives = builder.parse_bytes(&bytes)?;
    let model = builder.resolve(&primitives);
    let json = builder.render_json(&model)?;

    match &args.output {
        Some(output) => {
            fs::write(output, format!("{json}\n"))?;
            info!(output_file = output; "Model exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
