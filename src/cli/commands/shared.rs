//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and terminal reporting used
//! by both commands.

use crate::app::models::report::{FieldChange, Severity, ValidationWarning};
use crate::app::services::ingest_service::BatchStats;
use crate::config::IngestConfig;
use crate::{Error, Result};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity-derived level.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aerodrome_ingest={}", log_level)));

    let initialized = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    initialized
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> env)
///
/// Without an explicit file, the default config location is used when it exists.
pub fn load_configuration(config_file: Option<&Path>) -> Result<IngestConfig> {
    info!("Loading configuration");

    let default_config_path: Option<PathBuf> = if config_file.is_none() {
        IngestConfig::default_config_path().ok()
    } else {
        None
    };

    let config_file = config_file.or_else(|| {
        default_config_path
            .as_deref()
            .filter(|path| path.exists())
    });

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults and environment variables");
    }

    IngestConfig::load_layered(config_file)
}

pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// Severity label coloured for the terminal
pub fn severity_label(severity: Severity) -> ColoredString {
    let label = format!("{:<7}", severity.to_string());
    match severity {
        Severity::Info => label.dimmed(),
        Severity::Warning => label.yellow(),
        Severity::Error => label.red().bold(),
    }
}

/// Print warnings, one indented line each
pub fn print_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        let value = warning
            .value
            .as_deref()
            .map(|value| format!(" '{}'", value))
            .unwrap_or_default();
        println!(
            "     {} {}{} ({}): {}",
            severity_label(warning.severity),
            warning.field.bright_white(),
            value,
            warning.rule.dimmed(),
            warning.suggestion
        );
    }
}

/// Print field changes, one indented line each
pub fn print_changes(changes: &[FieldChange]) {
    for change in changes {
        println!("     {} {}", "~".bright_cyan(), change);
    }
}

/// Print the batch summary block
pub fn print_summary(stats: &BatchStats, dry_run: bool, elapsed: std::time::Duration) {
    let title = if dry_run {
        "Aerodrome Ingestion Dry Run Complete"
    } else {
        "Aerodrome Ingestion Complete"
    };
    println!("\n{}", title.bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • Entries processed: {}", stats.processed);
    println!("   • Succeeded: {}", stats.succeeded.to_string().green());
    if stats.has_failures() {
        println!("   • Failed: {}", stats.failed.to_string().red());
    }
    println!("   • Changed: {}", stats.changed);
    println!(
        "   • Warnings: {} errors, {} warnings, {} infos",
        stats.errors, stats.warnings, stats.infos
    );
    println!("   • Processing time: {:.2}s", elapsed.as_secs_f64());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_configuration_from_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[parser]\ndocument_name = \"AIP\"\n").unwrap();

        let config = load_configuration(Some(file.path())).unwrap();

        assert_eq!(config.parser.document_name, "AIP");
    }

    #[test]
    fn test_load_configuration_missing_explicit_file_fails() {
        let result = load_configuration(Some(Path::new("/nonexistent/aerodrome.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_progress_bar() {
        let pb = create_progress_bar(5, "Ingesting");
        assert_eq!(pb.length(), Some(5));
        assert_eq!(pb.message(), "Ingesting");
    }

    #[test]
    fn test_severity_labels_are_padded() {
        colored::control::set_override(false);
        assert_eq!(severity_label(Severity::Info).to_string(), "INFO   ");
        assert_eq!(severity_label(Severity::Error).to_string(), "ERROR  ");
    }
}
