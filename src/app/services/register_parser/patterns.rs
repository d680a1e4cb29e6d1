//! Line patterns recognized by the register parser
//!
//! Anchored patterns classify whole lines; the coordinate and elevation
//! patterns are also used unanchored to find a fragment inside a line.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{AGENCY_CODES, NAVAID_FAMILIES, NAVAID_TYPES, PLACEHOLDER_VALUES};

/// Words that look like a four-letter location indicator but never are one
const NOT_A_LOCATION: &[&str] = &["FUEL", "COMB", "NOTE", "PERM", "NONE", "ELEV", "INFO"];

pub static ICAO_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ICAO\s*:?\s*)?\(?(?P<icao>[A-Z]{4})\)?$").expect("valid ICAO header regex")
});

pub static RUNWAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^RWY\s+(?P<desig>\S+)(?:\s+(?P<dims>\d+\s*[Xx×]\s*\d+|\S+))?(?:\s+(?P<tail>.*))?$")
        .expect("valid runway regex")
});

pub static NOTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^INFOTEMP\s+(?P<id>\S+)(?:\s+(?P<rest>.*))?$").expect("valid notice regex")
});

pub static COMMUNICATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<agencies>[A-Z]+(?:/[A-Z]+)*)(?:-(?P<callsign>[A-Z0-9]+))?\s+(?P<first>\d{3}[.,]\d{1,3}|\d{6})(?P<rest>(?:\s+.*)?)$",
    )
    .expect("valid communication regex")
});

/// Navaid line whose type is whole family tokens joined by '/', e.g. "VOR/DME"
pub static NAVAID: LazyLock<Regex> = LazyLock::new(|| {
    let mut tokens: Vec<&str> = NAVAID_FAMILIES
        .iter()
        .copied()
        .chain(NAVAID_TYPES.iter().flat_map(|navaid_type| navaid_type.split('/')))
        .collect();
    tokens.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    tokens.dedup();
    let token = tokens.join("|");
    Regex::new(&format!(
        r"^(?P<type>(?:{token})(?:/(?:{token}))*)\s+(?P<ident>[A-Z0-9]{{1,4}})(?:\s+(?P<rest>.*))?$"
    ))
    .expect("valid navaid regex")
});

pub static SERVICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>FUEL|COMB|MNT|RFF|SCI|MET|AIS|RMK|NOTE)(?:\s*:\s*|\s+|$)(?P<rest>.*)$")
        .expect("valid service regex")
});

pub static NOTE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<number>\d{1,3})[.)]?\s+(?P<text>.+)$").expect("valid note regex")
});

/// Coordinate pair in spaced or compact notation, unanchored
pub static COORDINATE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?P<pair>
            \d{1,2}\s+\d{1,2}(?:\s+\d{1,2}(?:\.\d+)?)?\s*[NS]
            \s*/\s*
            \d{1,3}\s+\d{1,2}(?:\s+\d{1,2}(?:\.\d+)?)?\s*[EW]
          |
            \d{4}(?:\d{2})?(?:\.\d+)?[NS]
            \s*/\s*
            \d{5}(?:\d{2})?(?:\.\d+)?[EW]
        )",
    )
    .expect("valid coordinate pair regex")
});

/// Explicitly labelled coordinate line; always normalized, even when malformed
pub static COORDINATE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:COORD|ARP)[A-Z]*\s*:?\s*(?P<raw>.+)$").expect("valid coordinate label regex")
});

/// Elevation pair "meters (feet)", unanchored
pub static ELEVATION_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<elev>\d{1,4}(?:[.,]\d+)?\s*M?\s*\(\s*\d{1,5}(?:[.,]\d+)?\s*(?:FT)?\s*\))")
        .expect("valid elevation pair regex")
});

/// Line holding nothing but an elevation pair
pub static ELEVATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<raw>\d{1,4}(?:[.,]\d+)?\s*M?\s*\(\s*\d{1,5}(?:[.,]\d+)?\s*(?:FT)?\s*\))$",
    )
    .expect("valid elevation line regex")
});

/// Explicitly labelled elevation line; always normalized, even when malformed
pub static ELEVATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ELEV[A-Z]*\s*:?\s*(?P<raw>.+)$").expect("valid elevation label regex")
});

/// Numbered free-text block "N content"
pub static NUMBERED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<number>\d{1,2})[.)]?(?:\s+(?P<content>.*))?$").expect("valid block regex")
});

/// Associated runway on a navaid line
pub static NAVAID_RUNWAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bRWY\s+(?P<desig>[0-9]{2}[LCR]?)\b").expect("valid navaid runway regex")
});

/// Approach category on a navaid line
pub static NAVAID_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bCAT\s+(?P<cat>[A-Z0-9/]+)").expect("valid navaid category regex")
});

pub static HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:H24|HJ|HN|HX|HO|HS|\d{4}-\d{4})$").expect("valid hours regex")
});

pub static LIGHTING_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L\d").expect("valid lighting token regex"));

pub static NOTICE_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid notice timestamp regex"));

pub static LIST_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\s]+").expect("valid list separator regex"));

/// Check if a header candidate is a location indicator rather than a keyword
pub fn is_location_indicator(candidate: &str) -> bool {
    !NOT_A_LOCATION.contains(&candidate)
        && !AGENCY_CODES.contains(&candidate)
        && !NAVAID_FAMILIES.contains(&candidate)
}

/// Check if a block value carries no information
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_VALUES.contains(&value.trim().to_uppercase().as_str())
}

/// Check if every agency code on a communication line is known
pub fn are_known_agencies(agencies: &str) -> bool {
    agencies
        .split('/')
        .all(|agency| AGENCY_CODES.contains(&agency))
}
