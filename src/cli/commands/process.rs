//! Process command: ingest register entry files
//!
//! Discovers entry files, runs them through the ingest service on a bounded
//! worker pool and reports per-entry results plus a batch summary.

use super::shared::{
    create_progress_bar, load_configuration, print_changes, print_summary, print_warnings,
    setup_logging,
};
use crate::app::adapters::filesystem::JsonDirectoryRepository;
use crate::app::models::report::ProcessResult;
use crate::app::services::ingest_service::{BatchStats, IngestService};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::cli::input::{discover_entry_files, read_entries};
use crate::config::IngestConfig;
use anyhow::Context;
use colored::Colorize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Process command runner
///
/// 1. Set up logging and configuration
/// 2. Discover and read entry files
/// 3. Run the pipeline with progress reporting
/// 4. Report results and summary statistics
pub async fn run_process(args: ProcessArgs) -> anyhow::Result<BatchStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting aerodrome ingestion");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = load_configuration(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, &args);
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let files = discover_entry_files(&args.paths, &config.batch.input_pattern)?;
    if files.is_empty() {
        warn!(
            "No files matching '{}' found in the given paths",
            config.batch.input_pattern
        );
        return Ok(BatchStats::default());
    }
    let entries = read_entries(&files)?;
    info!("Loaded {} register entries", entries.len());

    let repository = JsonDirectoryRepository::open(&config.storage.data_dir).with_context(|| {
        format!(
            "Failed to open aggregate store at {}",
            config.storage.data_dir.display()
        )
    })?;
    let service = IngestService::from_config(&config, Arc::new(repository));

    let progress_bar = args
        .show_progress()
        .then(|| create_progress_bar(entries.len() as u64, "Ingesting entries"));

    let items = entries
        .into_iter()
        .map(|entry| (entry.icao_hint, entry.text));
    let results = service
        .process_batch_concurrent_with(items, args.dry_run, |result| {
            if let Some(pb) = &progress_bar {
                pb.set_message(result.icao.clone());
                pb.inc(1);
            }
        })
        .await;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Ingestion complete");
    }

    let stats = BatchStats::from_results(&results);
    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                print_results(&results);
            }
            print_summary(&stats, args.dry_run, start_time.elapsed());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results)
                .context("Failed to serialize results")?;
            println!("{}", json);
        }
    }

    info!("{}", stats.summary());
    Ok(stats)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut IngestConfig, args: &ProcessArgs) {
    if let Some(workers) = args.workers {
        config.batch.workers = workers;
    }
    if let Some(data_dir) = &args.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    if let Some(pattern) = &args.pattern {
        config.batch.input_pattern = pattern.clone();
    }
}

fn print_results(results: &[ProcessResult]) {
    println!();
    for result in results {
        let marker = if result.success {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("{} {} {}", marker, result.icao.bold(), result.message);
        print_warnings(&result.warnings);
        if let Some(diff) = &result.diff {
            print_changes(diff);
        }
    }
}
