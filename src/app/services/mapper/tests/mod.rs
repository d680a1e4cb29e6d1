//! Tests for the record to aggregate mapper

pub mod diff_tests;
pub mod projection_tests;

use chrono::{TimeZone, Utc};

use crate::app::models::aggregate::AerodromeAggregate;
use crate::app::models::{
    AerodromeInfo, CanonicalRecord, CityDistance, Communication, CommunicationCategory,
    Coordinates, DistanceUnit, Elevation, Navaid, RescueCategory, Runway, RunwayDimensions,
    Services, SourceInfo, SupplementaryNote, TemporaryNotice,
};
use crate::app::services::mapper::Mapper;

pub fn create_test_record() -> CanonicalRecord {
    let mut aerodrome = AerodromeInfo::new("SBMT", "CAMPO DE MARTE");
    aerodrome.municipality = Some("São Paulo".to_string());
    aerodrome.region = Some("SP".to_string());
    aerodrome.aerodrome_type = Some("PUB".to_string());
    aerodrome.city_distance = Some(CityDistance {
        value: 5.0,
        unit: DistanceUnit::Km,
        direction: Some("N".to_string()),
    });
    aerodrome.coordinates = Some(Coordinates::new(-23.509167, -46.6375));
    aerodrome.elevation = Some(Elevation {
        meters: Some(722.0),
        feet: Some(2369.0),
    });
    aerodrome.remarks = vec!["Helicopter ops N of TWY A".to_string(), "No glider ops".to_string()];

    CanonicalRecord {
        aerodrome,
        runways: vec![Runway {
            designators: vec!["12".to_string(), "30".to_string()],
            dimensions: Some(RunwayDimensions {
                length: 1600,
                width: 45,
            }),
            surface: Some("ASPH".to_string()),
            pcn: Some("30/F/B/X/T".to_string()),
            lighting: vec!["L4A(3.00)".to_string()],
            threshold_note: None,
            remarks: None,
        }],
        communications: vec![
            Communication {
                agencies: vec!["TWR".to_string()],
                callsign: Some("MT".to_string()),
                frequencies: vec![118.25, 127.45],
                hours: Some("0900-2100".to_string()),
                emergency: false,
                category: CommunicationCategory::Ats,
            },
            Communication {
                agencies: vec!["UNICOM".to_string()],
                callsign: None,
                frequencies: vec![],
                hours: None,
                emergency: false,
                category: CommunicationCategory::Other,
            },
        ],
        navaids: vec![Navaid {
            navaid_type: "NDB".to_string(),
            identifier: "MTE".to_string(),
            frequency: Some(0.35),
            coordinates: None,
            runway: None,
            category: None,
        }],
        services: Services {
            fuel: vec!["AVGAS".to_string()],
            rescue: Some(RescueCategory {
                primary: 4,
                secondary: None,
            }),
            ..Services::default()
        },
        temporary_notices: vec![TemporaryNotice {
            id: "L0042/2024".to_string(),
            valid_from: None,
            valid_until: None,
            permanent: true,
            text: "PAPI RWY 30 U/S".to_string(),
        }],
        source: SourceInfo {
            document: "ROTAER".to_string(),
            captured_at: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
            originating_icao: "SBMT".to_string(),
        },
    }
}

pub fn project_test_record() -> AerodromeAggregate {
    Mapper::new()
        .to_aggregate(Some(&create_test_record()))
        .expect("record projects")
}
