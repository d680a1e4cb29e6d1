//! Tests for frequency normalization

use super::*;
use crate::app::services::normalizer::{normalize_frequency, normalize_frequency_tokens};
use crate::constants::rules;

#[test]
fn test_decimal_and_comma_notation() {
    assert_eq!(normalize_frequency("118.1").value, Some(118.1));
    assert_eq!(normalize_frequency("118,10").value, Some(118.1));
    assert_eq!(normalize_frequency("127.150").value, Some(127.15));
}

#[test]
fn test_compact_six_digit_notation() {
    assert_eq!(normalize_frequency("127150").value, Some(127.15));
    assert_eq!(normalize_frequency("121500").value, Some(121.5));
}

#[test]
fn test_beacon_kilohertz_is_canonicalized_to_megahertz() {
    assert_eq!(normalize_frequency("375").value, Some(0.375));
    assert_eq!(normalize_frequency("1750").value, Some(1.75));
}

#[test]
fn test_decimal_values_stay_megahertz() {
    assert_eq!(normalize_frequency("256.500").value, Some(256.5));
    assert_eq!(normalize_frequency("318,1").value, Some(318.1));
}

#[test]
fn test_list_skips_non_numeric_tokens() {
    let normalized = normalize_frequency_tokens(["118.1", "ABC", "121.5"]);

    assert_eq!(normalized.value.unwrap(), vec![118.1, 121.5]);
    assert_single_warning(&normalized.warnings, rules::FREQUENCY_FORMAT, Severity::Warning);
    assert_eq!(normalized.warnings[0].field, "frequencies");
}
