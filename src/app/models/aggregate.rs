//! Persistent aerodrome aggregate
//!
//! The aggregate is the shape stored by the repository collaborator. It is a
//! flattened projection of the canonical record plus the bookkeeping fields
//! the register never supplies (identity, timestamps, curated notes).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RescueCategory, RunwayDimensions, SupplementaryNote};
use crate::constants::{NOTICE_PERMANENT, NOTICE_TIMESTAMP_FORMAT, bands};

/// Stored aerodrome entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AerodromeAggregate {
    /// Repository-assigned identity, absent until first saved
    pub id: Option<u64>,

    pub icao: String,
    pub name: String,
    pub municipality: Option<String>,
    pub region: Option<String>,
    pub aerodrome_type: Option<String>,
    pub category: Option<String>,
    pub usage: Option<String>,
    pub administrator: Option<String>,
    pub city_distance: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation_m: Option<f64>,
    pub elevation_ft: Option<f64>,
    pub timezone: Option<String>,
    pub operating_hours: Option<String>,
    pub lighting: Vec<String>,
    pub remarks: Option<String>,
    pub fir: Option<String>,
    pub jurisdiction: Option<String>,

    pub runways: Vec<RunwayEntity>,
    pub frequencies: Vec<FrequencyEntity>,
    pub navaids: Vec<NavaidEntity>,
    pub services: ServiceEntity,
    pub notices: Vec<NoticeEntity>,

    /// Operator-maintained notes, never overwritten by ingestion
    pub curated_notes: Option<String>,

    pub source_document: String,
    pub captured_at: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Stored runway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwayEntity {
    pub designator: String,
    pub length_m: Option<u32>,
    pub width_m: Option<u32>,
    pub surface: Option<String>,
    pub pcn: Option<String>,
    pub lighting: Vec<String>,
    pub threshold_note: Option<String>,
    pub remarks: Option<String>,
}

impl RunwayEntity {
    /// Dimensions, when both length and width are known
    pub fn dimensions(&self) -> Option<RunwayDimensions> {
        match (self.length_m, self.width_m) {
            (Some(length), Some(width)) => Some(RunwayDimensions { length, width }),
            _ => None,
        }
    }

    /// Compact one-line summary used in diffs
    pub fn summary(&self) -> String {
        let dimensions = self
            .dimensions()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string());
        let mut parts = vec![
            self.designator.clone(),
            dimensions,
            self.surface.clone().unwrap_or_else(|| "?".to_string()),
        ];
        parts.extend(self.pcn.clone());
        parts.extend(self.lighting.iter().cloned());
        parts.extend(self.threshold_note.as_ref().map(|note| format!("THR {}", note)));
        parts.extend(self.remarks.as_ref().map(|remarks| format!("({})", remarks)));
        parts.join(" ")
    }
}

/// Stored frequency assignment, one row per published frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyEntity {
    pub agency: String,
    pub callsign: Option<String>,
    pub frequency: f64,
    pub hours: Option<String>,
    pub emergency: bool,
    pub category: String,
}

impl FrequencyEntity {
    pub fn summary(&self) -> String {
        let station = match &self.callsign {
            Some(callsign) => format!("{}-{}", self.agency, callsign),
            None => self.agency.clone(),
        };
        let mut summary = format!("{} {}", station, bands::format(self.frequency));
        if let Some(hours) = &self.hours {
            summary.push(' ');
            summary.push_str(hours);
        }
        if self.emergency {
            summary.push_str(" EMERG");
        }
        summary
    }
}

/// Stored navigation aid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavaidEntity {
    pub navaid_type: String,
    pub identifier: String,
    pub frequency: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub runway: Option<String>,
    pub category: Option<String>,
}

impl NavaidEntity {
    pub fn summary(&self) -> String {
        let mut parts = vec![self.navaid_type.clone(), self.identifier.clone()];
        parts.extend(self.frequency.map(bands::format));
        if let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) {
            parts.push(format!("{:.6},{:.6}", latitude, longitude));
        }
        parts.extend(self.runway.as_ref().map(|runway| format!("RWY {}", runway)));
        parts.extend(self.category.as_ref().map(|category| format!("CAT {}", category)));
        parts.join(" ")
    }
}

/// Stored ground services
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntity {
    pub fuel: Vec<String>,
    pub maintenance: Vec<String>,
    pub rescue: Option<RescueCategory>,
    pub met_contacts: Vec<String>,
    pub ais_contacts: Vec<String>,
    pub remarks: Option<String>,
    pub notes: Vec<SupplementaryNote>,
}

/// Stored temporary notice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeEntity {
    pub id: String,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub permanent: bool,
    pub text: String,
}

impl NoticeEntity {
    /// Identifier, validity window and text on one line
    pub fn summary(&self) -> String {
        let mut parts = vec![self.id.clone()];
        parts.extend(
            self.valid_from
                .map(|from| from.format(NOTICE_TIMESTAMP_FORMAT).to_string()),
        );
        if self.permanent {
            parts.push(NOTICE_PERMANENT.to_string());
        } else {
            parts.extend(
                self.valid_until
                    .map(|until| until.format(NOTICE_TIMESTAMP_FORMAT).to_string()),
            );
        }
        if !self.text.is_empty() {
            parts.push(self.text.clone());
        }
        parts.join(" ")
    }
}
