//! Validate command: parse and validate one entry without storing it

use super::shared::{load_configuration, print_warnings, setup_logging};
use crate::app::adapters::repository::InMemoryRepository;
use crate::app::models::report::{Severity, ValidationWarning};
use crate::app::services::ingest_service::{BatchStats, IngestService};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::cli::input::read_entry;
use anyhow::Context;
use colored::Colorize;
use std::sync::Arc;
use tracing::{debug, info};

/// Validate command runner
///
/// The entry counts as failed when any ERROR-severity warning is reported.
pub async fn run_validate(args: ValidateArgs) -> anyhow::Result<BatchStats> {
    setup_logging(args.get_log_level(), false)?;
    debug!("Validation arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(args.config_file.as_deref())?;
    config.validate()?;

    let entry = read_entry(&args.file)
        .with_context(|| format!("Failed to load entry {}", args.file.display()))?;
    let icao = args
        .icao
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or(entry.icao_hint);

    let service = IngestService::from_config(&config, Arc::new(InMemoryRepository::new()));
    let warnings = service.validate_only(&icao, &entry.text);
    info!("Validated {}: {} warnings", icao, warnings.len());

    let stats = stats_for(&warnings);
    match args.output_format {
        OutputFormat::Human => {
            if warnings.is_empty() {
                println!("{} {} no warnings", "✓".green(), icao.bold());
            } else {
                let marker = if stats.has_failures() {
                    "✗".red()
                } else {
                    "!".yellow()
                };
                println!(
                    "{} {} {} errors, {} warnings, {} infos",
                    marker,
                    icao.bold(),
                    stats.errors,
                    stats.warnings,
                    stats.infos
                );
                print_warnings(&warnings);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&warnings)
                .context("Failed to serialize warnings")?;
            println!("{}", json);
        }
    }

    Ok(stats)
}

fn stats_for(warnings: &[ValidationWarning]) -> BatchStats {
    let count = |severity| warnings.iter().filter(|w| w.severity == severity).count();
    let errors = count(Severity::Error);
    BatchStats {
        processed: 1,
        succeeded: usize::from(errors == 0),
        failed: usize::from(errors > 0),
        infos: count(Severity::Info),
        warnings: count(Severity::Warning),
        errors,
        ..BatchStats::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_for_clean_entry() {
        let stats = stats_for(&[]);
        assert_eq!(stats.processed, 1);
        assert_eq!(stats.succeeded, 1);
        assert!(!stats.has_failures());
    }

    #[test]
    fn test_stats_for_entry_with_errors() {
        let warnings = vec![
            ValidationWarning::info("aerodrome.type", "type_vocabulary", "x"),
            ValidationWarning::error("aerodrome.icao", "icao_format", "y"),
        ];

        let stats = stats_for(&warnings);

        assert_eq!(stats.failed, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.infos, 1);
    }
}
