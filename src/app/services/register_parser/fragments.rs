//! Fixed-format fragments: runway, communication, navaid and notice lines
//!
//! Each function receives the captures of an anchored line pattern and the
//! index the fragment will take in its collection, and returns the fragment
//! with its warnings already rooted at that index (e.g. "runways[0].dimensions").

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Captures;

use super::patterns::{
    COORDINATE_PAIR, HOURS, LIGHTING_TOKEN, NAVAID_CATEGORY, NAVAID_RUNWAY, NOTICE_TIMESTAMP,
};
use crate::app::models::report::ValidationWarning;
use crate::app::models::{Communication, CommunicationCategory, Navaid, Runway, TemporaryNotice};
use crate::app::services::normalizer::{
    Normalized, normalize_coordinate_pair, normalize_designators, normalize_dimensions,
    normalize_frequency, normalize_frequency_tokens, normalize_lighting_tokens, normalize_pcn,
    normalize_surface,
};
use crate::constants::{EMERGENCY_AGENCY_CODES, NOTICE_PERMANENT, NOTICE_TIMESTAMP_FORMAT, bands, rules};

/// Build a runway from `RWY <desig> <dims> <surface> [pcn] [L..] [THR note] [; remarks]`
pub fn parse_runway(captures: &Captures, index: usize) -> Normalized<Runway> {
    let mut warnings = Vec::new();

    let designators = normalize_designators(&captures["desig"])
        .drain_into(&mut warnings)
        .unwrap_or_default();

    let dimensions = captures
        .name("dims")
        .and_then(|dims| normalize_dimensions(dims.as_str()).drain_into(&mut warnings));

    let tail = captures.name("tail").map(|tail| tail.as_str()).unwrap_or("");
    let (structured, trailing) = match tail.split_once(';') {
        Some((structured, trailing)) => (structured, Some(trailing.trim())),
        None => (tail, None),
    };

    let mut tokens = structured.split_whitespace().peekable();

    let surface = tokens
        .next_if(|token| !LIGHTING_TOKEN.is_match(token) && *token != "THR")
        .and_then(|token| normalize_surface(token).drain_into(&mut warnings));

    let pcn = tokens
        .next_if(|token| token.contains('/') || token.starts_with(|c: char| c.is_ascii_digit()))
        .and_then(|token| normalize_pcn(token).drain_into(&mut warnings));

    let mut lighting_tokens = Vec::new();
    while let Some(token) = tokens.next_if(|token| LIGHTING_TOKEN.is_match(token)) {
        lighting_tokens.push(token);
    }
    let lighting = normalize_lighting_tokens(lighting_tokens)
        .drain_into(&mut warnings)
        .unwrap_or_default();

    let leftover: Vec<&str> = tokens.collect();
    let (before_threshold, threshold_note) = match leftover.iter().position(|token| *token == "THR")
    {
        Some(position) => {
            let note = leftover[position + 1..].join(" ");
            (&leftover[..position], Some(note).filter(|note| !note.is_empty()))
        }
        None => (&leftover[..], None),
    };

    let remarks = before_threshold
        .iter()
        .copied()
        .chain(trailing)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let runway = Runway {
        designators,
        dimensions,
        surface,
        pcn,
        lighting,
        threshold_note,
        remarks: Some(remarks).filter(|remarks| !remarks.is_empty()),
    };

    Normalized {
        value: Some(runway),
        warnings,
    }
    .under(&format!("runways[{}]", index))
}

/// Build a communication entry from `<AGENCY>[/..][-<CALLSIGN>] <freq>.. [<hours>]`
pub fn parse_communication(captures: &Captures, index: usize) -> Normalized<Communication> {
    let agencies: Vec<String> = captures["agencies"]
        .split('/')
        .map(str::to_string)
        .collect();
    let callsign = captures.name("callsign").map(|c| c.as_str().to_string());

    let tokens = std::iter::once(&captures["first"]).chain(captures["rest"].split_whitespace());
    let (hours, frequency_tokens): (Vec<&str>, Vec<&str>) =
        tokens.partition(|token| HOURS.is_match(token));

    let (frequencies, warnings) = normalize_frequency_tokens(frequency_tokens).into_parts();
    let frequencies = frequencies.unwrap_or_default();

    let emergency = agencies
        .iter()
        .any(|agency| EMERGENCY_AGENCY_CODES.contains(&agency.as_str()))
        || frequencies
            .iter()
            .any(|frequency| (frequency - bands::EMERGENCY_MHZ).abs() < bands::EPSILON);

    let category = CommunicationCategory::from_agencies(&agencies);
    let communication = Communication {
        agencies,
        callsign,
        frequencies,
        hours: Some(hours.join(" ")).filter(|hours| !hours.is_empty()),
        emergency,
        category,
    };

    Normalized {
        value: Some(communication),
        warnings,
    }
    .under(&format!("communications[{}]", index))
}

/// Build a navaid from `<TYPE> <IDENT> [<freq>] [<coord pair>] [RWY <desig>] [CAT <cat>]`
pub fn parse_navaid(captures: &Captures, index: usize) -> Normalized<Navaid> {
    let mut warnings = Vec::new();
    let rest = captures.name("rest").map(|rest| rest.as_str()).unwrap_or("");

    let pair = COORDINATE_PAIR.find(rest);
    let coordinates = pair.and_then(|pair| {
        normalize_coordinate_pair(pair.as_str()).drain_into(&mut warnings)
    });

    // A marker may publish a position but no frequency
    let frequency = match pair {
        Some(pair) if pair.start() == 0 => None,
        _ => rest
            .split_whitespace()
            .next()
            .filter(|token| token.starts_with(|c: char| c.is_ascii_digit()))
            .and_then(|token| {
                let mut normalized = normalize_frequency(token);
                for warning in &mut normalized.warnings {
                    warning.field = "frequency".to_string();
                }
                normalized.drain_into(&mut warnings)
            }),
    };

    let navaid = Navaid {
        navaid_type: captures["type"].to_string(),
        identifier: captures["ident"].to_string(),
        frequency,
        coordinates,
        runway: NAVAID_RUNWAY
            .captures(rest)
            .map(|runway| runway["desig"].to_string()),
        category: NAVAID_CATEGORY
            .captures(rest)
            .map(|category| category["cat"].to_string()),
    };

    Normalized {
        value: Some(navaid),
        warnings,
    }
    .under(&format!("navaids[{}]", index))
}

/// Build a temporary notice from `INFOTEMP <id> [<start> <end|PERM>] <text>`
///
/// `text` is the original-case remainder of the line after the identifier.
pub fn parse_notice(id: &str, text: &str, index: usize) -> Normalized<TemporaryNotice> {
    let mut warnings = Vec::new();
    let mut tokens = text.split_whitespace().peekable();

    let valid_from = tokens
        .next_if(|token| NOTICE_TIMESTAMP.is_match(token))
        .and_then(|token| parse_notice_timestamp(token, &mut warnings));

    let mut permanent = false;
    let valid_until = tokens
        .next_if(|token| {
            NOTICE_TIMESTAMP.is_match(token) || token.eq_ignore_ascii_case(NOTICE_PERMANENT)
        })
        .and_then(|token| {
            if token.eq_ignore_ascii_case(NOTICE_PERMANENT) {
                permanent = true;
                None
            } else {
                parse_notice_timestamp(token, &mut warnings)
            }
        });

    let notice = TemporaryNotice {
        id: id.to_string(),
        valid_from,
        valid_until,
        permanent,
        text: tokens.collect::<Vec<_>>().join(" "),
    };

    Normalized {
        value: Some(notice),
        warnings,
    }
    .under(&format!("temporaryNotices[{}]", index))
}

fn parse_notice_timestamp(
    token: &str,
    warnings: &mut Vec<ValidationWarning>,
) -> Option<DateTime<Utc>> {
    match NaiveDateTime::parse_from_str(token, NOTICE_TIMESTAMP_FORMAT) {
        Ok(timestamp) => Some(timestamp.and_utc()),
        Err(_) => {
            warnings.push(
                ValidationWarning::warning(
                    "validity",
                    rules::NOTICE_VALIDITY_FORMAT,
                    "Validity bounds are UTC timestamps 'YYMMDDHHMM'; bound left absent",
                )
                .with_value(token),
            );
            None
        }
    }
}
