//! Command-line argument definitions for the Cloudmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, scale overrides and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Cloudmap importer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Dia file (uncompressed XML)
    #[arg(help = "Path to the input .dia file")]
    pub input: String,

    /// Path to the output JSON file; the model goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Multiplier for every coordinate and size, overriding the configuration
    #[arg(long)]
    pub coord_scale: Option<f64>,

    /// Multiplier for line widths, overriding the configuration
    #[arg(long)]
    pub line_scale: Option<f64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
