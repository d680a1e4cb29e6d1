//! Data models for aerodrome register ingestion
//!
//! This module contains the canonical record produced by the parser: one
//! [`CanonicalRecord`] per ingested aerodrome entry, holding the aerodrome
//! identity, runways, communications, navaids, ground services, temporary
//! notices and source metadata. Field names serialize in camelCase and the
//! nesting is stable, so records can be emitted directly as JSON.
//!
//! The persistent projection lives in [`aggregate`]; warnings, diffs and
//! per-item results live in [`report`].

pub mod aggregate;
pub mod report;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{ATS_AGENCY_CODES, MET_AGENCY_CODES};

// =============================================================================
// Canonical Record (root)
// =============================================================================

/// Canonical record for one aerodrome ingestion run
///
/// Built once by the parser and never mutated afterwards. Every optional
/// field that could not be extracted stays `None` (or an empty list) rather
/// than a sentinel value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Aerodrome identity, classification, location and prose attributes
    pub aerodrome: AerodromeInfo,

    /// Runways in source order
    pub runways: Vec<Runway>,

    /// Communication services in source order
    pub communications: Vec<Communication>,

    /// Navigation aids in source order
    pub navaids: Vec<Navaid>,

    /// Ground services
    pub services: Services,

    /// Temporary aerodrome-status notices in source order
    pub temporary_notices: Vec<TemporaryNotice>,

    /// Source document metadata
    pub source: SourceInfo,
}

impl CanonicalRecord {
    /// ICAO code of the aerodrome
    pub fn icao(&self) -> &str {
        &self.aerodrome.icao
    }
}

// =============================================================================
// Aerodrome
// =============================================================================

/// Aerodrome-level attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AerodromeInfo {
    /// Four-letter ICAO location indicator
    pub icao: String,

    /// Aerodrome name (falls back to the ICAO code, never empty)
    pub name: String,

    /// Served municipality
    pub municipality: Option<String>,

    /// Two-letter region (federative unit) code
    pub region: Option<String>,

    /// Aerodrome type code (e.g. "PUB", "PRIV", "MIL")
    #[serde(rename = "type")]
    pub aerodrome_type: Option<String>,

    /// Aerodrome category code (e.g. "INTL", "DOM")
    pub category: Option<String>,

    /// Usage code (e.g. "VFR", "VFR/IFR")
    pub usage: Option<String>,

    /// Administrating body
    pub administrator: Option<String>,

    /// Distance and direction from the served city
    pub city_distance: Option<CityDistance>,

    /// Aerodrome reference point
    pub coordinates: Option<Coordinates>,

    /// Aerodrome elevation
    pub elevation: Option<Elevation>,

    /// Timezone designation (e.g. "UTC-3")
    pub timezone: Option<String>,

    /// Operating schedule, either a code ("H24") or a time range
    pub operating_hours: Option<String>,

    /// Aerodrome lighting codes
    pub lighting: Vec<String>,

    /// General remarks in source order
    pub remarks: Vec<String>,

    /// Governing airspace references
    pub airspace: AirspaceRefs,
}

impl AerodromeInfo {
    /// Create aerodrome info holding only identity, every other field absent
    pub fn new(icao: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            icao: icao.into(),
            name: name.into(),
            municipality: None,
            region: None,
            aerodrome_type: None,
            category: None,
            usage: None,
            administrator: None,
            city_distance: None,
            coordinates: None,
            elevation: None,
            timezone: None,
            operating_hours: None,
            lighting: Vec::new(),
            remarks: Vec::new(),
            airspace: AirspaceRefs::default(),
        }
    }
}

/// Position in WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Elevation as published: meters with the imperial value alongside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Elevation {
    pub meters: Option<f64>,
    pub feet: Option<f64>,
}

/// Unit of the distance from the served city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DistanceUnit {
    Km,
    Nm,
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "KM" => Ok(DistanceUnit::Km),
            "NM" => Ok(DistanceUnit::Nm),
            other => Err(format!("Unknown distance unit: {}", other)),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Km => write!(f, "KM"),
            DistanceUnit::Nm => write!(f, "NM"),
        }
    }
}

/// Distance and compass direction from the served city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDistance {
    pub value: f64,
    pub unit: DistanceUnit,
    pub direction: Option<String>,
}

impl fmt::Display for CityDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)?;
        if let Some(direction) = &self.direction {
            write!(f, " {}", direction)?;
        }
        Ok(())
    }
}

/// Flight information region and jurisdiction references
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirspaceRefs {
    pub fir: Option<String>,
    pub jurisdiction: Option<String>,
}

// =============================================================================
// Runways
// =============================================================================

/// Runway length and width in meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwayDimensions {
    pub length: u32,
    pub width: u32,
}

impl fmt::Display for RunwayDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.length, self.width)
    }
}

/// Runway as published in the register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runway {
    /// Valid designators (e.g. ["09", "27"]); invalid tokens are dropped
    pub designators: Vec<String>,

    /// Length and width, absent when the dimension token was unparseable
    pub dimensions: Option<RunwayDimensions>,

    /// Canonical surface code (unknown abbreviations pass through)
    pub surface: Option<String>,

    /// Pavement classification number, verbatim when non-conforming
    pub pcn: Option<String>,

    /// Runway lighting codes
    pub lighting: Vec<String>,

    /// Threshold note (text following "THR")
    pub threshold_note: Option<String>,

    /// Free-text remarks left over on the runway line
    pub remarks: Option<String>,
}

impl Runway {
    /// Designator pair label, e.g. "09/27"
    pub fn label(&self) -> String {
        self.designators.join("/")
    }
}

// =============================================================================
// Communications and Navaids
// =============================================================================

/// Communication service category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommunicationCategory {
    Ats,
    Met,
    Other,
}

impl CommunicationCategory {
    /// Categorize from the operating agency codes; meteorological codes win
    pub fn from_agencies(agencies: &[String]) -> Self {
        if agencies
            .iter()
            .any(|agency| MET_AGENCY_CODES.contains(&agency.as_str()))
        {
            CommunicationCategory::Met
        } else if agencies
            .iter()
            .any(|agency| ATS_AGENCY_CODES.contains(&agency.as_str()))
        {
            CommunicationCategory::Ats
        } else {
            CommunicationCategory::Other
        }
    }
}

impl fmt::Display for CommunicationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommunicationCategory::Ats => write!(f, "ATS"),
            CommunicationCategory::Met => write!(f, "MET"),
            CommunicationCategory::Other => write!(f, "OTHER"),
        }
    }
}

/// Communication service with its frequencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    /// Operating agency codes (e.g. ["TWR", "GND"])
    pub agencies: Vec<String>,

    /// Callsign suffix (e.g. "SP" in "TWR-SP")
    pub callsign: Option<String>,

    /// Frequencies in source order
    pub frequencies: Vec<f64>,

    /// Operating hours
    pub hours: Option<String>,

    /// Emergency service or emergency frequency published
    pub emergency: bool,

    pub category: CommunicationCategory,
}

/// Navigation aid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navaid {
    #[serde(rename = "type")]
    pub navaid_type: String,
    pub identifier: String,
    pub frequency: Option<f64>,
    pub coordinates: Option<Coordinates>,
    pub runway: Option<String>,
    pub category: Option<String>,
}

// =============================================================================
// Services
// =============================================================================

/// Rescue and firefighting category pair (declared, reduced)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescueCategory {
    pub primary: u8,
    pub secondary: Option<u8>,
}

impl fmt::Display for RescueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// Numbered supplementary note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementaryNote {
    pub number: u32,
    pub text: String,
}

/// Ground services available at the aerodrome
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Services {
    pub fuel: Vec<String>,
    pub maintenance: Vec<String>,
    pub rescue: Option<RescueCategory>,
    pub met_contacts: Vec<String>,
    pub ais_contacts: Vec<String>,
    pub remarks: Vec<String>,
    pub notes: Vec<SupplementaryNote>,
}

impl Services {
    /// Check if no service information was extracted
    pub fn is_empty(&self) -> bool {
        self.fuel.is_empty()
            && self.maintenance.is_empty()
            && self.rescue.is_none()
            && self.met_contacts.is_empty()
            && self.ais_contacts.is_empty()
            && self.remarks.is_empty()
            && self.notes.is_empty()
    }
}

// =============================================================================
// Temporary Notices and Source
// =============================================================================

/// Temporary aerodrome-status notice (INFOTEMP)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryNotice {
    /// Raw identifier, nature letter + sequence (e.g. "R0123/2024")
    pub id: String,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    /// Notice declared permanent (no end of validity)
    pub permanent: bool,
    pub text: String,
}

/// Source document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub document: String,
    pub captured_at: DateTime<Utc>,
    pub originating_icao: String,
}
