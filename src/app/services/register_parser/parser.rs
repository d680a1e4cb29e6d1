//! Register entry parser
//!
//! Reads one aerodrome entry as an unordered bag of lines. Pass 1 classifies
//! each line against the anchored fragment patterns (first match wins) and
//! marks it consumed; pass 2 reads the remaining `N content` lines as
//! numbered blocks. Malformed fragments never abort the parse.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::blocks::{apply_block, is_known_block};
use super::draft::RecordDraft;
use super::fragments::{parse_communication, parse_navaid, parse_notice, parse_runway};
use super::patterns::{
    COMMUNICATION, COORDINATE_LABEL, COORDINATE_PAIR, ELEVATION_LABEL, ELEVATION_LINE,
    ELEVATION_PAIR, ICAO_HEADER, NAVAID, NOTICE, NUMBERED_BLOCK, RUNWAY, SERVICE,
    are_known_agencies, is_location_indicator,
};
use super::services_section::apply_service_line;
use crate::app::models::CanonicalRecord;
use crate::app::models::report::ValidationWarning;
use crate::app::services::normalizer::{normalize_coordinate_pair, normalize_elevation};
use crate::config::ParserConfig;
use crate::constants::{DEFAULT_DOCUMENT_NAME, rules};

/// Result of parsing one entry: the record (absent on hard failure) and parse warnings
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub record: Option<CanonicalRecord>,
    pub warnings: Vec<ValidationWarning>,
}

impl ParseOutcome {
    /// A hard failure: no record, exactly one ERROR warning
    pub fn failed(cause: ValidationWarning) -> Self {
        Self {
            record: None,
            warnings: vec![cause],
        }
    }
}

/// Seam between the orchestrator and the text parser
pub trait RecordParser: Send + Sync {
    /// Parse raw register text, using `icao_hint` when the text carries no header
    fn parse(&self, raw: &str, icao_hint: &str) -> ParseOutcome;
}

/// Parser for aerodrome register entries
///
/// The capture timestamp is fixed at construction so that parsing the same
/// text twice yields equal records.
#[derive(Debug, Clone)]
pub struct AerodromeParser {
    document: String,
    captured_at: DateTime<Utc>,
}

impl Default for AerodromeParser {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_NAME)
    }
}

impl AerodromeParser {
    /// Create a parser stamping records with the given source document name
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            captured_at: Utc::now(),
        }
    }

    /// Create a parser from configuration
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.document_name.clone())
    }

    /// Fix the capture timestamp recorded on every record
    pub fn with_captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.captured_at = captured_at;
        self
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Parse one register entry
    pub fn parse(&self, raw: &str, icao_hint: &str) -> ParseOutcome {
        if raw.trim().is_empty() {
            return ParseOutcome::failed(ValidationWarning::error(
                "rawText",
                rules::EMPTY_INPUT,
                "Input text is empty; nothing to parse",
            ));
        }

        let lines: Vec<&str> = raw.lines().map(str::trim).collect();
        let mut draft = RecordDraft::new();

        // Pass 1: anchored fragments
        let consumed: Vec<bool> = lines
            .iter()
            .map(|line| line.is_empty() || self.classify_line(&mut draft, line))
            .collect();

        // Pass 2: numbered blocks on the remaining lines
        for (line, _) in lines.iter().zip(&consumed).filter(|(_, consumed)| !**consumed) {
            if let Some(captures) = NUMBERED_BLOCK.captures(line) {
                if let Ok(number) = captures["number"].parse::<u8>() {
                    let content = captures.name("content").map(|c| c.as_str()).unwrap_or("");
                    apply_block(&mut draft, number, content);
                }
            }
        }

        let (record, warnings) = draft.finish(icao_hint, &self.document, self.captured_at);

        debug!(
            "Parsed {}: {} runways, {} communications, {} navaids, {} notices, {} warnings",
            record.icao(),
            record.runways.len(),
            record.communications.len(),
            record.navaids.len(),
            record.temporary_notices.len(),
            warnings.len()
        );

        ParseOutcome {
            record: Some(record),
            warnings,
        }
    }

    /// Classify one non-empty line; returns whether it was consumed
    fn classify_line(&self, draft: &mut RecordDraft, line: &str) -> bool {
        // ASCII uppercasing keeps byte offsets, so prose can be sliced from `line`
        let upper = line.to_ascii_uppercase();

        if let Some(captures) = ICAO_HEADER.captures(&upper) {
            let icao = &captures["icao"];
            if is_location_indicator(icao) {
                if draft.header_icao.is_none() {
                    debug!("Found location indicator header {}", icao);
                    draft.header_icao = Some(icao.to_string());
                }
                return true;
            }
        }

        if let Some(captures) = RUNWAY.captures(&upper) {
            let index = draft.runways.len();
            let (runway, warnings) = parse_runway(&captures, index).into_parts();
            draft.warnings.extend(warnings);
            if let Some(runway) = runway {
                debug!("Found runway {}", runway.label());
                draft.runways.push(runway);
            }
            return true;
        }

        if let Some(captures) = NOTICE.captures(&upper) {
            let index = draft.temporary_notices.len();
            let text = captures.name("rest").map(|rest| &line[rest.range()]).unwrap_or("");
            let (notice, warnings) = parse_notice(&captures["id"], text, index).into_parts();
            draft.warnings.extend(warnings);
            if let Some(notice) = notice {
                debug!("Found temporary notice {}", notice.id);
                draft.temporary_notices.push(notice);
            }
            return true;
        }

        if let Some(captures) = COMMUNICATION.captures(&upper) {
            if are_known_agencies(&captures["agencies"]) {
                let index = draft.communications.len();
                let (communication, warnings) =
                    parse_communication(&captures, index).into_parts();
                draft.warnings.extend(warnings);
                if let Some(communication) = communication {
                    debug!("Found communication {}", communication.agencies.join("/"));
                    draft.communications.push(communication);
                }
                return true;
            }
        }

        if let Some(captures) = NAVAID.captures(&upper) {
            let index = draft.navaids.len();
            let (navaid, warnings) = parse_navaid(&captures, index).into_parts();
            draft.warnings.extend(warnings);
            if let Some(navaid) = navaid {
                debug!("Found navaid {} {}", navaid.navaid_type, navaid.identifier);
                draft.navaids.push(navaid);
            }
            return true;
        }

        if let Some(captures) = SERVICE.captures(&upper) {
            let rest = captures.name("rest").map(|rest| &line[rest.range()]).unwrap_or("");
            apply_service_line(&mut draft.services, &captures["key"], rest, &mut draft.warnings);
            return true;
        }

        if let Some(captures) = COORDINATE_LABEL.captures(&upper) {
            let raw = captures.name("raw").map(|raw| raw.as_str()).unwrap_or("");
            let remainder = match COORDINATE_PAIR.find(raw) {
                Some(pair) => {
                    self.take_coordinates(draft, pair.as_str());
                    &raw[pair.end()..]
                }
                None => {
                    self.take_coordinates(draft, raw);
                    ""
                }
            };
            if let Some(elevation) = ELEVATION_PAIR.find(remainder) {
                self.take_elevation(draft, elevation.as_str());
            }
            return true;
        }

        if let Some(pair) = COORDINATE_PAIR.find(&upper) {
            if pair.start() == 0 || !starts_with_known_block(&upper) {
                self.take_coordinates(draft, pair.as_str());
                if let Some(elevation) = ELEVATION_PAIR.find(&upper[pair.end()..]) {
                    self.take_elevation(draft, elevation.as_str());
                }
                return true;
            }
        }

        if let Some(captures) = ELEVATION_LABEL.captures(&upper) {
            let raw = &captures["raw"];
            let elevation = ELEVATION_PAIR.find(raw).map(|m| m.as_str()).unwrap_or(raw);
            self.take_elevation(draft, elevation);
            return true;
        }

        if let Some(captures) = ELEVATION_LINE.captures(&upper) {
            self.take_elevation(draft, &captures["raw"]);
            return true;
        }

        false
    }

    /// Keep the first recognized aerodrome position
    fn take_coordinates(&self, draft: &mut RecordDraft, raw: &str) {
        if draft.aerodrome.coordinates.is_some() {
            return;
        }
        draft.aerodrome.coordinates = normalize_coordinate_pair(raw)
            .under("aerodrome")
            .drain_into(&mut draft.warnings);
    }

    /// Keep the first recognized aerodrome elevation
    fn take_elevation(&self, draft: &mut RecordDraft, raw: &str) {
        if draft.aerodrome.elevation.is_some() {
            return;
        }
        draft.aerodrome.elevation = normalize_elevation(raw)
            .under("aerodrome")
            .drain_into(&mut draft.warnings);
    }
}

impl RecordParser for AerodromeParser {
    fn parse(&self, raw: &str, icao_hint: &str) -> ParseOutcome {
        AerodromeParser::parse(self, raw, icao_hint)
    }
}

fn starts_with_known_block(line: &str) -> bool {
    NUMBERED_BLOCK
        .captures(line)
        .and_then(|captures| captures["number"].parse::<u8>().ok())
        .is_some_and(is_known_block)
}
