//! Per-item pipeline and sequential batch processing

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::stats::BatchStats;
use crate::app::adapters::repository::AerodromeRepository;
use crate::app::models::report::{ProcessResult, Severity, ValidationWarning};
use crate::app::services::mapper::Mapper;
use crate::app::services::register_parser::{AerodromeParser, RecordParser};
use crate::app::services::validator::Validator;
use crate::config::IngestConfig;
use crate::constants::rules;

/// Orchestrates parsing, validation, mapping and persistence
///
/// Cloning is cheap: collaborators are shared behind `Arc`s, which is what
/// lets the concurrent batch path move a service into blocking tasks.
pub struct IngestService<R: AerodromeRepository> {
    pub(crate) parser: Arc<dyn RecordParser>,
    pub(crate) validator: Validator,
    pub(crate) mapper: Mapper,
    pub(crate) repository: Arc<R>,
    pub(crate) workers: usize,
}

impl<R: AerodromeRepository> Clone for IngestService<R> {
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
            validator: self.validator.clone(),
            mapper: self.mapper,
            repository: Arc::clone(&self.repository),
            workers: self.workers,
        }
    }
}

impl<R: AerodromeRepository> IngestService<R> {
    /// Create a service with default parser and validator settings
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            parser: Arc::new(AerodromeParser::default()),
            validator: Validator::default(),
            mapper: Mapper::new(),
            repository,
            workers: num_cpus::get(),
        }
    }

    /// Create a service from configuration
    pub fn from_config(config: &IngestConfig, repository: Arc<R>) -> Self {
        Self {
            parser: Arc::new(AerodromeParser::from_config(&config.parser)),
            validator: Validator::new(config.validation.clone()),
            mapper: Mapper::new(),
            repository,
            workers: config.batch.workers,
        }
    }

    /// Replace the parser collaborator
    pub fn with_parser(mut self, parser: Arc<dyn RecordParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Set the maximum number of items in flight for concurrent batches
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run the full pipeline for one register entry
    ///
    /// Never panics: a panic in any stage becomes a hard-failure result.
    pub fn process_one(&self, icao: &str, text: &str, dry_run: bool) -> ProcessResult {
        panic::catch_unwind(AssertUnwindSafe(|| self.run_pipeline(icao, text, dry_run)))
            .unwrap_or_else(|payload| {
                let message = panic_message(payload.as_ref());
                warn!("Pipeline for {} failed: {}", icao, message);
                ProcessResult::hard_failure(icao, dry_run, pipeline_failure(&message))
            })
    }

    /// Run the pipeline for each item in iteration order
    pub fn process_batch<I, K, V>(&self, items: I, dry_run: bool) -> Vec<ProcessResult>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let results: Vec<ProcessResult> = items
            .into_iter()
            .map(|(icao, text)| self.process_one(icao.as_ref(), text.as_ref(), dry_run))
            .collect();

        info!("Batch complete: {}", BatchStats::from_results(&results).summary());
        results
    }

    /// Parse and validate only; no mapping and no repository access
    pub fn validate_only(&self, icao: &str, text: &str) -> Vec<ValidationWarning> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            let outcome = self.parser.parse(text, icao);
            let mut warnings = outcome.warnings;
            if let Some(record) = &outcome.record {
                warnings.extend(self.validator.validate(record));
            }
            warnings
        }))
        .unwrap_or_else(|payload| vec![pipeline_failure(&panic_message(payload.as_ref()))])
    }

    fn run_pipeline(&self, icao_hint: &str, text: &str, dry_run: bool) -> ProcessResult {
        debug!("Received entry for {} ({} bytes)", icao_hint, text.len());

        // Received -> Parsed
        let outcome = self.parser.parse(text, icao_hint);
        let mut warnings = outcome.warnings;
        let Some(record) = outcome.record else {
            let cause = warnings
                .into_iter()
                .find(|warning| warning.severity == Severity::Error)
                .unwrap_or_else(|| pipeline_failure("parser produced no record"));
            warn!("Parsing {} failed: {}", icao_hint, cause.suggestion);
            return ProcessResult::hard_failure(icao_hint, dry_run, cause);
        };
        let icao = record.icao().to_string();
        debug!("Parsed {} with {} parse warnings", icao, warnings.len());

        // Parsed -> Validated
        warnings.extend(self.validator.validate(&record));
        debug!("Validated {}: {} warnings so far", icao, warnings.len());

        // Validated -> Mapped
        let Some(projected) = self.mapper.to_aggregate(Some(&record)) else {
            return ProcessResult::hard_failure(
                icao,
                dry_run,
                pipeline_failure("mapper produced no aggregate"),
            );
        };

        let existing = match self.repository.find_by_icao(&icao) {
            Ok(existing) => existing,
            Err(e) => {
                warn!("Lookup of stored aggregate {} failed: {}", icao, e);
                warnings.push(ValidationWarning::warning(
                    "repository",
                    rules::REPOSITORY_LOOKUP_FAILED,
                    format!("Could not load the stored aggregate; no diff computed: {}", e),
                ));
                None
            }
        };

        let (aggregate, diff) = match &existing {
            Some(existing) => {
                let diff = self.mapper.diff(existing, &projected);
                (self.mapper.merge_into(existing, projected), Some(diff))
            }
            None => (projected, None),
        };
        let change_count = diff.as_ref().map_or(0, Vec::len);
        debug!("Mapped {}: {} field changes", icao, change_count);

        // Mapped -> DryRunDone | Persisted | PersistFailed
        let (success, message) = if dry_run {
            (
                true,
                format!(
                    "Dry run: {} warnings, {} changes, nothing saved",
                    warnings.len(),
                    change_count
                ),
            )
        } else {
            match self.repository.save(aggregate) {
                Ok(saved) => (
                    true,
                    format!(
                        "Saved {} (id {}): {} warnings, {} changes",
                        icao,
                        saved.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                        warnings.len(),
                        change_count
                    ),
                ),
                Err(e) => {
                    warn!("Persisting {} failed: {}", icao, e);
                    warnings.push(ValidationWarning::error(
                        "repository",
                        rules::PERSISTENCE_FAILED,
                        format!("Aggregate was not saved: {}", e),
                    ));
                    (false, format!("Persistence failed: {}", e))
                }
            }
        };

        info!("Processed {}: {}", icao, message);

        ProcessResult {
            success,
            warnings,
            record: Some(record),
            diff,
            icao,
            dry_run,
            message,
        }
    }
}

pub(crate) fn pipeline_failure(message: &str) -> ValidationWarning {
    ValidationWarning::error(
        "pipeline",
        rules::PIPELINE_FAILURE,
        format!("Internal failure while processing entry: {}", message),
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
