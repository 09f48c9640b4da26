//! This module provides functionality for setting up logging

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Sets up the logger based on verbosity and optional log file path.
///
/// Timing lines are emitted at info level, so they are visible by default.
pub fn setup_logger(verbosity: u8, log_output: Option<PathBuf>) {
    let mut builder = Builder::from_default_env();
    builder.format_timestamp(None);

    builder.filter_level(match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    match log_output {
        Some(path) => match File::create(&path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file) as Box<dyn Write + Send>));
            }
            Err(_) => {
                eprintln!(
                    "Could not create log file at {}. Defaulting to stderr.",
                    path.display()
                );
                builder.target(Target::Stderr);
            }
        },
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder.init();
}
