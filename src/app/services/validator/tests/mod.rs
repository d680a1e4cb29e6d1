//! Tests for the validator rule engine

pub mod aerodrome_rules_tests;

use chrono::{TimeZone, Utc};

use crate::app::models::report::{Severity, ValidationWarning};
use crate::app::models::{
    AerodromeInfo, CanonicalRecord, Communication, CommunicationCategory, Coordinates, Elevation,
    Navaid, RescueCategory, Runway, RunwayDimensions, Services, SourceInfo, TemporaryNotice,
};

/// A record that passes every rule
pub fn valid_record() -> CanonicalRecord {
    let mut aerodrome = AerodromeInfo::new("SBSP", "CONGONHAS");
    aerodrome.region = Some("SP".to_string());
    aerodrome.aerodrome_type = Some("PUB".to_string());
    aerodrome.category = Some("INTL/DOM".to_string());
    aerodrome.usage = Some("VFR/IFR".to_string());
    aerodrome.coordinates = Some(Coordinates::new(-23.626111, -46.656389));
    aerodrome.elevation = Some(Elevation {
        meters: Some(802.0),
        feet: Some(2631.0),
    });
    aerodrome.timezone = Some("UTC-3".to_string());
    aerodrome.operating_hours = Some("H24".to_string());

    CanonicalRecord {
        aerodrome,
        runways: vec![
            Runway {
                designators: vec!["17R".to_string(), "35L".to_string()],
                dimensions: Some(RunwayDimensions {
                    length: 1940,
                    width: 45,
                }),
                surface: Some("ASPH".to_string()),
                pcn: Some("52/F/A/X/T".to_string()),
                lighting: vec![],
                threshold_note: None,
                remarks: None,
            },
            Runway {
                designators: vec!["17L".to_string(), "35R".to_string()],
                dimensions: Some(RunwayDimensions {
                    length: 1495,
                    width: 45,
                }),
                surface: Some("ASPH".to_string()),
                pcn: None,
                lighting: vec![],
                threshold_note: None,
                remarks: None,
            },
        ],
        communications: vec![Communication {
            agencies: vec!["TWR".to_string()],
            callsign: Some("SP".to_string()),
            frequencies: vec![118.05, 127.15],
            hours: None,
            emergency: false,
            category: CommunicationCategory::Ats,
        }],
        navaids: vec![Navaid {
            navaid_type: "VOR/DME".to_string(),
            identifier: "CGO".to_string(),
            frequency: Some(116.9),
            coordinates: Some(Coordinates::new(-23.62, -46.65)),
            runway: None,
            category: None,
        }],
        services: Services {
            fuel: vec!["JETA1".to_string(), "AVGAS100LL".to_string()],
            maintenance: vec!["S4".to_string()],
            rescue: Some(RescueCategory {
                primary: 7,
                secondary: Some(6),
            }),
            ..Services::default()
        },
        temporary_notices: vec![TemporaryNotice {
            id: "R0123/2024".to_string(),
            valid_from: Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()),
            valid_until: Some(Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap()),
            permanent: false,
            text: "RWY 17R/35L CLSD".to_string(),
        }],
        source: SourceInfo {
            document: "ROTAER".to_string(),
            captured_at: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
            originating_icao: "SBSP".to_string(),
        },
    }
}

/// Warnings produced by a given rule
pub fn by_rule<'a>(warnings: &'a [ValidationWarning], rule: &str) -> Vec<&'a ValidationWarning> {
    warnings.iter().filter(|warning| warning.rule == rule).collect()
}

/// Assert exactly one warning of a rule, returning it
pub fn assert_single<'a>(
    warnings: &'a [ValidationWarning],
    rule: &str,
    severity: Severity,
) -> &'a ValidationWarning {
    let matching = by_rule(warnings, rule);
    assert_eq!(
        matching.len(),
        1,
        "expected one '{}' warning, got {:?}",
        rule,
        warnings
    );
    assert_eq!(matching[0].severity, severity);
    matching[0]
}
