//! Tests for coordinate normalization and formatting

use super::*;
use crate::app::services::normalizer::{
    Axis, format_coordinate, normalize_coordinate, normalize_coordinate_pair,
};
use crate::constants::rules;

#[test]
fn test_spaced_pair_to_decimal_degrees() {
    let normalized = normalize_coordinate_pair("23 32 52S / 046 38 08W");
    assert!(normalized.is_clean());

    let coordinates = normalized.value.unwrap();
    assert_close(coordinates.latitude, -23.5478, 0.000_1);
    assert_close(coordinates.longitude, -46.6356, 0.000_1);
}

#[test]
fn test_compact_decimal_minutes() {
    let normalized = normalize_coordinate_pair("2332.87S/04638.13W");
    let coordinates = normalized.value.unwrap();

    assert_close(coordinates.latitude, -(23.0 + 32.87 / 60.0), DEGREE_TOLERANCE);
    assert_close(coordinates.longitude, -(46.0 + 38.13 / 60.0), DEGREE_TOLERANCE);
}

#[test]
fn test_compact_with_seconds() {
    let normalized = normalize_coordinate("233252S", Axis::Latitude);
    assert_close(
        normalized.value.unwrap(),
        -(23.0 + 32.0 / 60.0 + 52.0 / 3600.0),
        DEGREE_TOLERANCE,
    );
}

#[test]
fn test_northern_and_eastern_hemispheres_are_positive() {
    let lat = normalize_coordinate("02 50 00N", Axis::Latitude).value.unwrap();
    let lon = normalize_coordinate("032 25 30E", Axis::Longitude).value.unwrap();

    assert!(lat > 0.0);
    assert!(lon > 0.0);
    assert_close(lat, 2.0 + 50.0 / 60.0, DEGREE_TOLERANCE);
}

#[test]
fn test_seconds_are_optional_in_spaced_notation() {
    let value = normalize_coordinate("23 30S", Axis::Latitude).value.unwrap();
    assert_close(value, -23.5, DEGREE_TOLERANCE);
}

#[test]
fn test_round_trip_through_formatting() {
    let samples = [
        ("23 32 52S", Axis::Latitude),
        ("046 38 08W", Axis::Longitude),
        ("03 51 17.25S", Axis::Latitude),
        ("038 31 59.50W", Axis::Longitude),
        ("00 00 01N", Axis::Latitude),
    ];

    for (raw, axis) in samples {
        let decimal = normalize_coordinate(raw, axis).value.unwrap();
        let formatted = format_coordinate(decimal, axis);
        let again = normalize_coordinate(&formatted, axis).value.unwrap();

        assert_eq!(formatted, raw);
        assert_close(again, decimal, DEGREE_TOLERANCE);
    }
}

#[test]
fn test_malformed_pairs_yield_one_error_and_no_value() {
    let malformed = [
        "",
        "garbage",
        "23 32 52S",
        "23 32 52X / 046 38 08W",
        "23 75 00S / 046 38 08W",
        "23 32 52S / 046 38 08N",
        "0/0",
        "1/2/3",
    ];

    for raw in malformed {
        let normalized = normalize_coordinate_pair(raw);
        assert!(normalized.value.is_none(), "accepted {:?}", raw);
        assert_single_warning(&normalized.warnings, rules::COORDINATE_FORMAT, Severity::Error);
        assert_eq!(normalized.warnings[0].field, "coordinates");
    }
}

#[test]
fn test_wrong_axis_hemisphere_is_rejected() {
    let normalized = normalize_coordinate("046 38 08W", Axis::Latitude);
    assert!(normalized.value.is_none());
    assert_eq!(normalized.warnings.len(), 1);
}

#[test]
fn test_format_pads_degrees_per_axis() {
    assert_eq!(format_coordinate(-3.5, Axis::Latitude), "03 30 00S");
    assert_eq!(format_coordinate(-38.25, Axis::Longitude), "038 15 00W");
    assert_eq!(format_coordinate(0.0, Axis::Longitude), "000 00 00E");
}
