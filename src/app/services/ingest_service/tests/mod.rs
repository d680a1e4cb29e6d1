//! Test utilities for the ingest service
//!
//! Provides fixed-timestamp services, short register entries and
//! collaborators that misbehave on purpose.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::app::adapters::repository::{AerodromeRepository, InMemoryRepository};
use crate::app::models::aggregate::AerodromeAggregate;
use crate::app::services::ingest_service::IngestService;
use crate::app::services::register_parser::{AerodromeParser, ParseOutcome, RecordParser};
use crate::{Error, Result};


/// Marker that makes [`PanickingParser`] panic
pub const PANIC_MARKER: &str = "TRIGGER-PANIC";

pub fn create_test_parser() -> AerodromeParser {
    AerodromeParser::new("ROTAER")
        .with_captured_at(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
}

/// Service over a fresh in-memory repository
pub fn create_test_service() -> IngestService<InMemoryRepository> {
    IngestService::new(Arc::new(InMemoryRepository::new()))
        .with_parser(Arc::new(create_test_parser()))
        .with_workers(2)
}

pub fn congonhas_entry() -> &'static str {
    "SBSP\n\
     1 CONGONHAS\n\
     3 SP\n\
     4 PUB\n\
     23 37 34S / 046 39 23W\n\
     802 (2631)\n\
     RWY 17R/35L 1940X45 ASF 52/F/A/X/T\n\
     TWR-SP 127.150 118.050\n\
     RFF 7"
}

pub fn campo_de_marte_entry() -> &'static str {
    "SBMT\n\
     1 CAMPO DE MARTE\n\
     3 SP\n\
     RWY 12/30 1600X45 ASF 30/F/B/X/T\n\
     TWR-MT 118.250"
}

/// Parser that panics on entries containing [`PANIC_MARKER`]
pub struct PanickingParser {
    inner: AerodromeParser,
}

impl PanickingParser {
    pub fn new() -> Self {
        Self {
            inner: create_test_parser(),
        }
    }
}

impl RecordParser for PanickingParser {
    fn parse(&self, raw: &str, icao_hint: &str) -> ParseOutcome {
        if raw.contains(PANIC_MARKER) {
            panic!("simulated parser crash for {}", icao_hint);
        }
        self.inner.parse(raw, icao_hint)
    }
}

/// Repository whose writes always fail
#[derive(Debug, Default)]
pub struct FailingRepository;

impl AerodromeRepository for FailingRepository {
    fn find_by_icao(&self, _icao: &str) -> Result<Option<AerodromeAggregate>> {
        Ok(None)
    }

    fn save(&self, _aggregate: AerodromeAggregate) -> Result<AerodromeAggregate> {
        Err(Error::repository("disk full"))
    }
}

/// Repository whose reads always fail
#[derive(Debug, Default)]
pub struct UnreadableRepository {
    inner: InMemoryRepository,
}

impl AerodromeRepository for UnreadableRepository {
    fn find_by_icao(&self, _icao: &str) -> Result<Option<AerodromeAggregate>> {
        Err(Error::repository("index unavailable"))
    }

    fn save(&self, aggregate: AerodromeAggregate) -> Result<AerodromeAggregate> {
        self.inner.save(aggregate)
    }
}
