//! Ingestion orchestrator
//!
//! Sequences Parser -> Validator -> Mapper -> (persist | dry-run) for single
//! register entries and for batches, producing one [`ProcessResult`] per item.
//!
//! # Failure tiers
//!
//! Only two situations end an item early: the parser returns no record
//! (empty input), or a stage panics. Both surface as `success = false` with
//! exactly one ERROR warning. Everything else, including a repository
//! failure, is recorded as a warning and the item runs to completion. No item
//! can abort a batch.
//!
//! # Modules
//!
//! - [`service`] - [`IngestService`] and the per-item state machine
//! - [`concurrent`] - Order-preserving batch execution on tokio's blocking pool
//! - [`stats`] - Batch summary statistics
//!
//! # Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use aerodrome_ingest::app::adapters::repository::InMemoryRepository;
//! use aerodrome_ingest::app::services::ingest_service::IngestService;
//!
//! let service = IngestService::new(Arc::new(InMemoryRepository::new()));
//! let result = service.process_one("SBMT", "SBMT\n1 CAMPO DE MARTE\n3 SP", true);
//!
//! assert!(result.success);
//! assert_eq!(result.icao, "SBMT");
//! ```
//!
//! [`ProcessResult`]: crate::app::models::report::ProcessResult

pub mod concurrent;
pub mod service;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use service::IngestService;
pub use stats::BatchStats;
