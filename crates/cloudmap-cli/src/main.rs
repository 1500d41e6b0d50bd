//! Cloudmap CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use cloudmap_cli::{Args, error_adapter::Report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    // stdout is reserved for the model
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .target(env_logger::Target::Stderr)
        .init();

    info!(log_level:?; "Starting Cloudmap");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = cloudmap_cli::run(&args) {
        let report = Report::new(&err);
        let mut writer = String::new();
        if miette::GraphicalReportHandler::new()
            .render_report(&mut writer, &report)
            .is_err()
        {
            writer = report.to_string();
        }
        error!("{writer}");

        process::exit(1);
    }

    info!("Completed successfully");
}
