//! Mutable record under construction
//!
//! The parser fills a [`RecordDraft`] fragment by fragment and resolves the
//! identity fields (ICAO code, name) only once the whole text was read.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::app::models::report::ValidationWarning;
use crate::app::models::{
    AerodromeInfo, CanonicalRecord, Communication, Navaid, Runway, Services, SourceInfo,
    TemporaryNotice,
};
use crate::constants::rules;

/// Record fields collected so far, plus the parse warnings raised on the way
#[derive(Debug, Clone)]
pub struct RecordDraft {
    /// First location indicator header found in the text
    pub header_icao: Option<String>,

    /// First real name block
    pub name: Option<String>,

    /// Aerodrome attributes; `icao` and `name` stay empty until [`RecordDraft::finish`]
    pub aerodrome: AerodromeInfo,

    pub runways: Vec<Runway>,
    pub communications: Vec<Communication>,
    pub navaids: Vec<Navaid>,
    pub services: Services,
    pub temporary_notices: Vec<TemporaryNotice>,

    pub warnings: Vec<ValidationWarning>,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordDraft {
    pub fn new() -> Self {
        Self {
            header_icao: None,
            name: None,
            aerodrome: AerodromeInfo::new("", ""),
            runways: Vec::new(),
            communications: Vec::new(),
            navaids: Vec::new(),
            services: Services::default(),
            temporary_notices: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Resolve identity and produce the immutable record
    ///
    /// The text header wins over the hint; a differing non-empty hint is
    /// reported. A missing name falls back to the ICAO code.
    pub fn finish(
        mut self,
        icao_hint: &str,
        document: &str,
        captured_at: DateTime<Utc>,
    ) -> (CanonicalRecord, Vec<ValidationWarning>) {
        let hint = icao_hint.trim().to_uppercase();

        let icao = match self.header_icao.take() {
            Some(header) => {
                if !hint.is_empty() && header != hint {
                    self.warnings.push(
                        ValidationWarning::warning(
                            "aerodrome.icao",
                            rules::ICAO_HINT_MISMATCH,
                            format!(
                                "Text header '{}' differs from the expected code '{}'; header used",
                                header, hint
                            ),
                        )
                        .with_value(header.clone()),
                    );
                }
                header
            }
            None => hint,
        };

        let name = match self.name.take() {
            Some(name) => name,
            None => {
                debug!("No name block for {}, using the ICAO code", icao);
                self.warnings.push(ValidationWarning::info(
                    "aerodrome.name",
                    rules::NAME_FALLBACK,
                    "Name not found in the text; the ICAO code stands in as the name",
                ));
                icao.clone()
            }
        };

        self.aerodrome.icao = icao.clone();
        self.aerodrome.name = name;

        let record = CanonicalRecord {
            aerodrome: self.aerodrome,
            runways: self.runways,
            communications: self.communications,
            navaids: self.navaids,
            services: self.services,
            temporary_notices: self.temporary_notices,
            source: SourceInfo {
                document: document.to_string(),
                captured_at,
                originating_icao: icao,
            },
        };

        (record, self.warnings)
    }
}
