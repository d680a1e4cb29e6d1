use super::*;
use crate::app::services::validator::Validator;
use crate::config::ValidationConfig;
use crate::constants::rules;

#[test]
fn test_valid_record_has_no_warnings() {
    let validator = Validator::default();
    let warnings = validator.validate(&valid_record());
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
}

#[test]
fn test_validation_is_total_on_minimal_record() {
    let mut record = valid_record();
    record.aerodrome = AerodromeInfo::new("", "");
    record.runways.clear();
    record.communications.clear();
    record.navaids.clear();
    record.services = Services::default();
    record.temporary_notices.clear();

    let warnings = Validator::default().validate(&record);

    assert_single(&warnings, rules::ICAO_FORMAT, Severity::Error);
    // An empty code has no domestic prefix
    assert_single(&warnings, rules::REGION_MISSING, Severity::Info);
}

#[test]
fn test_validation_does_not_mutate_record() {
    let mut record = valid_record();
    record.aerodrome.icao = "sbsp".to_string();
    let before = record.clone();

    let _ = Validator::default().validate(&record);

    assert_eq!(record, before);
}

#[test]
fn test_lowercase_icao_is_error() {
    let mut record = valid_record();
    record.aerodrome.icao = "SBS1".to_string();

    let warnings = Validator::default().validate(&record);
    let warning = assert_single(&warnings, rules::ICAO_FORMAT, Severity::Error);
    assert_eq!(warning.field, "aerodrome.icao");
    assert_eq!(warning.value.as_deref(), Some("SBS1"));
}

#[test]
fn test_missing_region_domestic_is_error() {
    let mut record = valid_record();
    record.aerodrome.region = None;

    let warnings = Validator::default().validate(&record);
    assert_single(&warnings, rules::REGION_MISSING, Severity::Error);
}

#[test]
fn test_missing_region_foreign_is_info() {
    let mut record = valid_record();
    record.aerodrome.icao = "SAEZ".to_string();
    record.aerodrome.region = None;

    let warnings = Validator::default().validate(&record);
    assert_single(&warnings, rules::REGION_MISSING, Severity::Info);
}

#[test]
fn test_malformed_region_is_error() {
    let mut record = valid_record();
    record.aerodrome.region = Some("SAO".to_string());

    let warnings = Validator::default().validate(&record);
    assert_single(&warnings, rules::REGION_FORMAT, Severity::Error);
}

#[test]
fn test_position_outside_bounding_box() {
    let mut record = valid_record();
    record.aerodrome.coordinates = Some(Coordinates::new(40.6413, -73.7781));

    let warnings = Validator::default().validate(&record);
    let warning = assert_single(&warnings, rules::COORDINATES_BOUNDS, Severity::Warning);
    assert_eq!(warning.field, "aerodrome.coordinates");
}

#[test]
fn test_custom_bounding_box_is_honored() {
    let mut config = ValidationConfig::default();
    config.bounding_box.max_lat = -30.0;

    let warnings = Validator::new(config).validate(&valid_record());
    // Aerodrome and navaid both lie north of the box
    assert_eq!(by_rule(&warnings, rules::COORDINATES_BOUNDS).len(), 2);
}

#[test]
fn test_elevation_mismatch_beyond_tolerance() {
    let mut record = valid_record();
    record.aerodrome.elevation = Some(Elevation {
        meters: Some(802.0),
        feet: Some(2700.0),
    });

    let warnings = Validator::default().validate(&record);
    assert_single(&warnings, rules::ELEVATION_CONSISTENCY, Severity::Warning);
}

#[test]
fn test_elevation_with_one_unit_is_not_cross_checked() {
    let mut record = valid_record();
    record.aerodrome.elevation = Some(Elevation {
        meters: Some(802.0),
        feet: None,
    });

    let warnings = Validator::default().validate(&record);
    assert!(by_rule(&warnings, rules::ELEVATION_CONSISTENCY).is_empty());
}

#[test]
fn test_unknown_vocabulary_values_are_info() {
    let mut record = valid_record();
    record.aerodrome.aerodrome_type = Some("HELI".to_string());
    record.aerodrome.usage = Some("SVFR".to_string());

    let warnings = Validator::default().validate(&record);
    assert_single(&warnings, rules::TYPE_VOCABULARY, Severity::Info);
    assert_single(&warnings, rules::USAGE_VOCABULARY, Severity::Info);
    assert!(warnings.iter().all(|warning| warning.severity == Severity::Info));
}

#[test]
fn test_operating_hours_accepts_codes_and_time_ranges() {
    let mut record = valid_record();
    record.aerodrome.operating_hours = Some("HJ 1000-2200".to_string());
    let warnings = Validator::default().validate(&record);
    assert!(by_rule(&warnings, rules::OPERATION_VOCABULARY).is_empty());

    record.aerodrome.operating_hours = Some("SUNRISE".to_string());
    let warnings = Validator::default().validate(&record);
    assert_single(&warnings, rules::OPERATION_VOCABULARY, Severity::Info);
}

#[test]
fn test_timezone_format() {
    let mut record = valid_record();
    for accepted in ["UTC", "UTC-3", "UTC+5:30"] {
        record.aerodrome.timezone = Some(accepted.to_string());
        let warnings = Validator::default().validate(&record);
        assert!(by_rule(&warnings, rules::TIMEZONE_FORMAT).is_empty(), "{}", accepted);
    }

    record.aerodrome.timezone = Some("BRT".to_string());
    let warnings = Validator::default().validate(&record);
    assert_single(&warnings, rules::TIMEZONE_FORMAT, Severity::Info);
}
