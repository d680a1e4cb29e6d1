//! Repository collaborator for persisted aerodrome aggregates
//!
//! The pipeline only needs two operations: look up the aggregate currently
//! stored for an ICAO code, and save a new or updated aggregate. Transactions
//! and identity assignment belong to the implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::app::models::aggregate::AerodromeAggregate;
use crate::{Error, Result};

/// Storage seam used by the ingest service
pub trait AerodromeRepository: Send + Sync {
    /// Find the stored aggregate for an ICAO code
    fn find_by_icao(&self, icao: &str) -> Result<Option<AerodromeAggregate>>;

    /// Persist an aggregate, returning it with identity and timestamps assigned
    fn save(&self, aggregate: AerodromeAggregate) -> Result<AerodromeAggregate>;
}

impl<T: AerodromeRepository + ?Sized> AerodromeRepository for Arc<T> {
    fn find_by_icao(&self, icao: &str) -> Result<Option<AerodromeAggregate>> {
        (**self).find_by_icao(icao)
    }

    fn save(&self, aggregate: AerodromeAggregate) -> Result<AerodromeAggregate> {
        (**self).save(aggregate)
    }
}

/// Stamp identity and timestamps on an aggregate about to be stored
pub(crate) fn stamp_for_save(aggregate: &mut AerodromeAggregate, next_id: impl FnOnce() -> u64) {
    let now = Utc::now();
    if aggregate.id.is_none() {
        aggregate.id = Some(next_id());
    }
    if aggregate.created_at.is_none() {
        aggregate.created_at = Some(now);
    }
    aggregate.updated_at = Some(now);
}

/// Carry identity from an already stored aggregate onto one saved without an id
///
/// Two items of one batch can resolve to the same ICAO code; the later save
/// must update the stored document rather than mint a second identity.
pub(crate) fn adopt_identity(aggregate: &mut AerodromeAggregate, stored: &AerodromeAggregate) {
    if aggregate.id.is_some() {
        return;
    }
    aggregate.id = stored.id;
    aggregate.created_at = aggregate.created_at.or(stored.created_at);
    if aggregate.curated_notes.is_none() {
        aggregate.curated_notes = stored.curated_notes.clone();
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    aggregates: HashMap<String, AerodromeAggregate>,
    last_id: u64,
    saves: usize,
}

/// Thread-safe in-memory repository
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with stored aggregates
    pub fn with_aggregates(aggregates: impl IntoIterator<Item = AerodromeAggregate>) -> Self {
        let mut state = MemoryState::default();
        for aggregate in aggregates {
            state.last_id = state.last_id.max(aggregate.id.unwrap_or(0));
            state.aggregates.insert(aggregate.icao.clone(), aggregate);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    /// Number of stored aggregates
    pub fn len(&self) -> usize {
        self.lock().map(|state| state.aggregates.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `save` calls served so far
    pub fn save_count(&self) -> usize {
        self.lock().map(|state| state.saves).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| Error::repository("in-memory repository lock poisoned"))
    }
}

impl AerodromeRepository for InMemoryRepository {
    fn find_by_icao(&self, icao: &str) -> Result<Option<AerodromeAggregate>> {
        Ok(self.lock()?.aggregates.get(icao).cloned())
    }

    fn save(&self, mut aggregate: AerodromeAggregate) -> Result<AerodromeAggregate> {
        let mut state = self.lock()?;
        if let Some(stored) = state.aggregates.get(&aggregate.icao) {
            adopt_identity(&mut aggregate, stored);
        }
        let next_id = state.last_id + 1;
        stamp_for_save(&mut aggregate, || next_id);
        state.last_id = state.last_id.max(aggregate.id.unwrap_or(0));
        state.saves += 1;
        state
            .aggregates
            .insert(aggregate.icao.clone(), aggregate.clone());
        Ok(aggregate)
    }
}
