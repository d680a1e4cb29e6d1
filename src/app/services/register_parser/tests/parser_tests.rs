//! Tests for whole-entry parsing

use super::*;
use crate::app::models::report::Severity;
use crate::app::models::{CommunicationCategory, RunwayDimensions};
use crate::constants::rules;

#[test]
fn test_sample_entry_identity_and_blocks() {
    let outcome = create_test_parser().parse(sample_entry(), "SBSP");
    let record = outcome.record.unwrap();
    let aerodrome = &record.aerodrome;

    assert_eq!(aerodrome.icao, "SBSP");
    assert_eq!(aerodrome.name, "CONGONHAS");
    assert_eq!(aerodrome.municipality.as_deref(), Some("São Paulo"));
    assert_eq!(aerodrome.region.as_deref(), Some("SP"));
    assert_eq!(aerodrome.aerodrome_type.as_deref(), Some("PUB"));
    assert_eq!(aerodrome.category.as_deref(), Some("INTL"));
    assert_eq!(aerodrome.usage.as_deref(), Some("VFR/IFR"));
    assert_eq!(aerodrome.administrator.as_deref(), Some("INFRAERO"));
    assert_eq!(aerodrome.timezone.as_deref(), Some("UTC-3"));
    assert_eq!(aerodrome.operating_hours.as_deref(), Some("H24"));
    assert_eq!(aerodrome.lighting, vec!["L12", "L14"]);
    assert_eq!(aerodrome.remarks.len(), 1);
    assert_eq!(aerodrome.airspace.fir.as_deref(), Some("SBBS"));
    assert_eq!(aerodrome.airspace.jurisdiction.as_deref(), Some("DECEA"));
    assert_eq!(aerodrome.city_distance.as_ref().unwrap().to_string(), "8 KM S");

    let coordinates = aerodrome.coordinates.unwrap();
    assert!((coordinates.latitude - -23.626_1).abs() < 0.000_1);
    assert!((coordinates.longitude - -46.656_4).abs() < 0.000_1);

    let elevation = aerodrome.elevation.unwrap();
    assert_eq!(elevation.meters, Some(802.0));
    assert_eq!(elevation.feet, Some(2631.0));

    assert_eq!(record.source.document, "ROTAER");
    assert_eq!(record.source.captured_at, fixed_timestamp());
    assert_eq!(record.source.originating_icao, "SBSP");
}

#[test]
fn test_sample_entry_has_no_parse_warnings() {
    let outcome = create_test_parser().parse(sample_entry(), "SBSP");
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
}

#[test]
fn test_collections_keep_source_order() {
    let record = create_test_parser()
        .parse(sample_entry(), "SBSP")
        .record
        .unwrap();

    let runway_labels: Vec<String> = record.runways.iter().map(|r| r.label()).collect();
    assert_eq!(runway_labels, vec!["17R/35L", "17L/35R"]);

    let agencies: Vec<&str> = record
        .communications
        .iter()
        .map(|c| c.agencies[0].as_str())
        .collect();
    assert_eq!(agencies, vec!["TWR", "GND", "ATIS", "APP", "EMERG"]);

    let navaids: Vec<&str> = record.navaids.iter().map(|n| n.identifier.as_str()).collect();
    assert_eq!(navaids, vec!["CGO", "ISP"]);

    let notices: Vec<&str> = record
        .temporary_notices
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(notices, vec!["R0123/2024", "A0001/2024"]);
}

#[test]
fn test_runway_example_is_clean() {
    let outcome = create_test_parser().parse("SBXX\nRWY 09/27 2000X45 ASF 50/F/B/X/T", "");
    let record = outcome.record.unwrap();

    assert_eq!(record.runways.len(), 1);
    let runway = &record.runways[0];
    assert_eq!(runway.designators, vec!["09", "27"]);
    assert_eq!(
        runway.dimensions,
        Some(RunwayDimensions {
            length: 2000,
            width: 45
        })
    );
    assert_eq!(runway.surface.as_deref(), Some("ASPH"));
    assert_eq!(runway.pcn.as_deref(), Some("50/F/B/X/T"));
    assert!(
        outcome
            .warnings
            .iter()
            .all(|w| !w.field.starts_with("runways"))
    );
}

#[test]
fn test_unparseable_runway_dimensions_example() {
    let outcome = create_test_parser().parse("SBXX\nRWY 09/27 ABCxYZ GRAV", "");
    let record = outcome.record.unwrap();
    let runway = &record.runways[0];

    assert!(runway.dimensions.is_none());
    assert_eq!(runway.surface.as_deref(), Some("GRAV"));

    let runway_warnings: Vec<_> = outcome
        .warnings
        .iter()
        .filter(|w| w.field.starts_with("runways"))
        .collect();
    assert_eq!(runway_warnings.len(), 1);
    assert_eq!(runway_warnings[0].field, "runways[0].dimensions");
    assert_eq!(runway_warnings[0].severity, Severity::Warning);
}

#[test]
fn test_coordinate_example() {
    let record = create_test_parser()
        .parse("SBXX\n23 32 52S / 046 38 08W", "")
        .record
        .unwrap();
    let coordinates = record.aerodrome.coordinates.unwrap();

    assert!((coordinates.latitude - -23.547_8).abs() < 0.000_1);
    assert!((coordinates.longitude - -46.635_6).abs() < 0.000_1);
}

#[test]
fn test_empty_input_is_a_hard_failure() {
    for raw in ["", "   \n\t\n  "] {
        let outcome = create_test_parser().parse(raw, "SBSP");

        assert!(outcome.record.is_none());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].severity, Severity::Error);
        assert_eq!(outcome.warnings[0].rule, rules::EMPTY_INPUT);
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let parser = create_test_parser();
    let text = format!("{}\nRWY 09/27 ABCxYZ GRAV\nCOORD garbage", sample_entry());

    let first = parser.parse(&text, "SBSP");
    let second = parser.parse(&text, "SBSP");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.record).unwrap(),
        serde_json::to_string(&second.record).unwrap()
    );
}

#[test]
fn test_hint_used_when_text_has_no_header() {
    let record = create_test_parser()
        .parse("1 CAMPO DE MARTE", " sbmt ")
        .record
        .unwrap();

    assert_eq!(record.aerodrome.icao, "SBMT");
    assert_eq!(record.source.originating_icao, "SBMT");
}

#[test]
fn test_header_wins_over_differing_hint() {
    let outcome = create_test_parser().parse("SBGR\n1 GUARULHOS", "SBSP");

    assert_eq!(outcome.record.unwrap().aerodrome.icao, "SBGR");
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].rule, rules::ICAO_HINT_MISMATCH);
    assert_eq!(outcome.warnings[0].severity, Severity::Warning);
}

#[test]
fn test_missing_name_falls_back_to_icao() {
    let outcome = create_test_parser().parse("SBKP\nRWY 15/33 3240X45 ASF", "");
    let record = outcome.record.unwrap();

    assert_eq!(record.aerodrome.name, "SBKP");
    assert!(
        outcome
            .warnings
            .iter()
            .any(|w| w.rule == rules::NAME_FALLBACK && w.severity == Severity::Info)
    );
}

#[test]
fn test_malformed_fragment_does_not_prevent_others() {
    let outcome =
        create_test_parser().parse("SBXX\n1 TEST\nCOORD 99XX\nRWY 09/27 2000X45 ASF", "SBXX");
    let record = outcome.record.unwrap();

    assert!(record.aerodrome.coordinates.is_none());
    assert_eq!(record.runways.len(), 1);

    let coordinate_warnings: Vec<_> = outcome
        .warnings
        .iter()
        .filter(|w| w.rule == rules::COORDINATE_FORMAT)
        .collect();
    assert_eq!(coordinate_warnings.len(), 1);
    assert_eq!(coordinate_warnings[0].field, "aerodrome.coordinates");
    assert_eq!(coordinate_warnings[0].severity, Severity::Error);
}

#[test]
fn test_communications_in_sample() {
    let record = create_test_parser()
        .parse(sample_entry(), "SBSP")
        .record
        .unwrap();

    let tower = &record.communications[0];
    assert_eq!(tower.callsign.as_deref(), Some("SP"));
    assert_eq!(tower.frequencies, vec![127.15, 118.05]);
    assert_eq!(tower.hours.as_deref(), Some("H24"));
    assert_eq!(tower.category, CommunicationCategory::Ats);
    assert!(!tower.emergency);

    let emergency = &record.communications[4];
    assert!(emergency.emergency);
    assert_eq!(emergency.frequencies, vec![121.5]);
}

#[test]
fn test_services_in_sample() {
    let record = create_test_parser()
        .parse(sample_entry(), "SBSP")
        .record
        .unwrap();
    let services = &record.services;

    assert_eq!(services.fuel, vec!["AVGAS", "100LL", "JETA1"]);
    assert_eq!(services.maintenance, vec!["S2"]);
    assert_eq!(services.rescue.unwrap().primary, 7);
    assert_eq!(
        services.met_contacts,
        vec!["(11) 5090-9000", "met.sbsp@example.org"]
    );
    assert_eq!(services.ais_contacts, vec!["(11) 5090-9100"]);
    assert_eq!(services.remarks.len(), 1);
    assert_eq!(services.notes[0].number, 1);
    assert_eq!(services.notes[0].text, "Helicopter traffic in the vicinity");
}

#[test]
fn test_invalid_notice_identifier_is_preserved() {
    let record = create_test_parser()
        .parse("SBXX\nINFOTEMP Z9999/9999 PERM Unknown nature", "")
        .record
        .unwrap();

    assert_eq!(record.temporary_notices.len(), 1);
    assert_eq!(record.temporary_notices[0].id, "Z9999/9999");
    assert!(record.temporary_notices[0].permanent);
}
