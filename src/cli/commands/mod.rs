//! Command implementations for the aerodrome ingester CLI
//!
//! Each command lives in its own module; shared logging, configuration and
//! reporting helpers live in [`shared`].

pub mod process;
pub mod shared;
pub mod validate;

use crate::app::services::ingest_service::BatchStats;
use crate::cli::args::{Args, Commands};

/// Dispatch to the subcommand handler
///
/// Returns the batch statistics so the binary can choose its exit code.
pub async fn run(args: Args) -> anyhow::Result<BatchStats> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        None => Ok(BatchStats::default()),
    }
}
