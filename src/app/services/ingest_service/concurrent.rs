//! Concurrent batch execution
//!
//! Each item runs on tokio's blocking pool (the pipeline itself never awaits),
//! with at most `workers` items in flight. Results come back in input order.

use futures::stream::{self, StreamExt};
use tokio::task;
use tracing::{info, warn};

use super::service::{IngestService, pipeline_failure};
use super::stats::BatchStats;
use crate::app::adapters::repository::AerodromeRepository;
use crate::app::models::report::ProcessResult;

impl<R: AerodromeRepository + 'static> IngestService<R> {
    /// Process a batch concurrently, preserving input order
    pub async fn process_batch_concurrent<I>(&self, items: I, dry_run: bool) -> Vec<ProcessResult>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.process_batch_concurrent_with(items, dry_run, |_| {}).await
    }

    /// Process a batch concurrently, calling `on_result` as each result is yielded
    pub async fn process_batch_concurrent_with<I, F>(
        &self,
        items: I,
        dry_run: bool,
        mut on_result: F,
    ) -> Vec<ProcessResult>
    where
        I: IntoIterator<Item = (String, String)>,
        F: FnMut(&ProcessResult),
    {
        let workers = self.workers.max(1);

        let results: Vec<ProcessResult> = stream::iter(items)
            .map(|(icao, text)| {
                let service = self.clone();
                async move {
                    let hint = icao.clone();
                    match task::spawn_blocking(move || service.process_one(&icao, &text, dry_run))
                        .await
                    {
                        Ok(result) => result,
                        Err(e) => {
                            warn!("Worker for {} did not complete: {}", hint, e);
                            ProcessResult::hard_failure(
                                hint,
                                dry_run,
                                pipeline_failure(&e.to_string()),
                            )
                        }
                    }
                }
            })
            .buffered(workers)
            .inspect(|result| on_result(result))
            .collect()
            .await;

        info!(
            "Concurrent batch complete ({} workers): {}",
            workers,
            BatchStats::from_results(&results).summary()
        );
        results
    }
}
