//! Command-line argument definitions for the aerodrome ingester
//!
//! This module defines the CLI interface using the clap derive API: a
//! `process` command that runs the full pipeline over register entry files,
//! and a `validate` command that only parses and validates a single entry.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the aerodrome register ingester
///
/// Converts free-form aerodrome register entries into validated, structured
/// aerodrome records and stores them as JSON aggregates.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aerodrome-ingest",
    version,
    about = "Convert aerodrome register text into validated, structured aerodrome records",
    long_about = "Parses free-form aerodrome register entries (one entry per file), normalizes \
                  coordinates, runways, frequencies, navaids, services and temporary notices, \
                  grades every anomaly as INFO, WARNING or ERROR, and stores the resulting \
                  aggregates, reporting field-level changes against what was stored before."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest register entry files and store the resulting aggregates
    Process(ProcessArgs),
    /// Parse and validate a single entry without storing anything
    Validate(ValidateArgs),
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, coloured output
    Human,
    /// JSON for scripting
    Json,
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Register entry files or directories
    ///
    /// Each file holds one aerodrome entry; its file stem is used as the ICAO
    /// hint. Directories are walked recursively and filtered with --pattern.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Run the pipeline without storing aggregates
    #[arg(
        long = "dry-run",
        help = "Parse, validate and diff without storing anything"
    )]
    pub dry_run: bool,

    /// Number of entries processed concurrently
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of entries processed concurrently (default: number of CPUs)"
    )]
    pub workers: Option<usize>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/aerodrome-ingest/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Directory holding stored aggregates
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        help = "Directory holding stored aggregates"
    )]
    pub data_dir: Option<PathBuf>,

    /// File name pattern used when walking directories
    #[arg(
        long = "pattern",
        value_name = "GLOB",
        help = "File name pattern used when walking directories (default: *.txt)"
    )]
    pub pattern: Option<String>,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Register entry file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// ICAO hint, defaults to the file stem
    #[arg(long = "icao", value_name = "CODE", help = "ICAO hint (default: file stem)")]
    pub icao: Option<String>,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for warnings"
    )]
    pub output_format: OutputFormat,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Validate argument consistency
    pub fn validate(&self) -> Result<()> {
        for path in &self.paths {
            if !path.exists() {
                return Err(Error::input_not_found(path.display().to_string()));
            }
        }

        if self.workers == Some(0) {
            return Err(Error::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode or JSON output)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl ValidateArgs {
    pub fn validate(&self) -> Result<()> {
        if !self.file.is_file() {
            return Err(Error::input_not_found(self.file.display().to_string()));
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
