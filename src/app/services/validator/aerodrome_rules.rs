//! Identity, geometry, consistency and vocabulary rules for aerodrome attributes

use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::report::ValidationWarning;
use crate::app::models::{AerodromeInfo, Coordinates};
use crate::config::ValidationConfig;
use crate::constants::{
    AERODROME_CATEGORIES, AERODROME_TYPES, AERODROME_USAGES, FEET_PER_METER, OPERATION_CODES,
    rules,
};

static ICAO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}$").expect("valid ICAO regex"));

static REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("valid region regex"));

static TIME_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("valid time range regex"));

static TIMEZONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^UTC(?:[+-]\d{1,2}(?::\d{2})?)?$").expect("valid timezone regex")
});

/// Check aerodrome-level attributes
pub fn check_aerodrome(
    aerodrome: &AerodromeInfo,
    config: &ValidationConfig,
    warnings: &mut Vec<ValidationWarning>,
) {
    check_identity(aerodrome, config, warnings);

    if let Some(coordinates) = &aerodrome.coordinates {
        check_position("aerodrome.coordinates", coordinates, config, warnings);
    }

    check_elevation(aerodrome, config, warnings);
    check_vocabularies(aerodrome, warnings);
}

fn check_identity(
    aerodrome: &AerodromeInfo,
    config: &ValidationConfig,
    warnings: &mut Vec<ValidationWarning>,
) {
    if !ICAO.is_match(&aerodrome.icao) {
        warnings.push(
            ValidationWarning::error(
                "aerodrome.icao",
                rules::ICAO_FORMAT,
                "ICAO location indicators are exactly four uppercase letters",
            )
            .with_value(aerodrome.icao.clone()),
        );
    }

    let domestic = config.is_domestic(&aerodrome.icao);
    match &aerodrome.region {
        Some(region) if !REGION.is_match(region) => warnings.push(
            ValidationWarning::error(
                "aerodrome.region",
                rules::REGION_FORMAT,
                "Region codes are two uppercase letters, e.g. 'SP'",
            )
            .with_value(region.clone()),
        ),
        Some(_) => {}
        None if domestic => warnings.push(ValidationWarning::error(
            "aerodrome.region",
            rules::REGION_MISSING,
            "Domestic aerodromes must declare their two-letter region code",
        )),
        None => warnings.push(ValidationWarning::info(
            "aerodrome.region",
            rules::REGION_MISSING,
            "No region code; not required outside the domestic prefixes",
        )),
    }
}

/// Check a position against the configured bounding box
pub fn check_position(
    field: &str,
    coordinates: &Coordinates,
    config: &ValidationConfig,
    warnings: &mut Vec<ValidationWarning>,
) {
    if !config.bounding_box.contains(coordinates) {
        warnings.push(
            ValidationWarning::warning(
                field,
                rules::COORDINATES_BOUNDS,
                "Position lies outside the country bounding box; verify the transcription",
            )
            .with_value(format!(
                "{:.4}, {:.4}",
                coordinates.latitude, coordinates.longitude
            )),
        );
    }
}

fn check_elevation(
    aerodrome: &AerodromeInfo,
    config: &ValidationConfig,
    warnings: &mut Vec<ValidationWarning>,
) {
    let Some(elevation) = &aerodrome.elevation else {
        return;
    };

    if let (Some(meters), Some(feet)) = (elevation.meters, elevation.feet) {
        let converted = meters * FEET_PER_METER;
        if (converted - feet).abs() > config.elevation_tolerance_ft {
            warnings.push(
                ValidationWarning::warning(
                    "aerodrome.elevation",
                    rules::ELEVATION_CONSISTENCY,
                    format!(
                        "{} m converts to {:.0} ft, not {} ft",
                        meters, converted, feet
                    ),
                )
                .with_value(format!("{} ({})", meters, feet)),
            );
        }
    }
}

fn check_vocabularies(aerodrome: &AerodromeInfo, warnings: &mut Vec<ValidationWarning>) {
    let coded = [
        ("aerodrome.type", &aerodrome.aerodrome_type, AERODROME_TYPES, rules::TYPE_VOCABULARY),
        ("aerodrome.category", &aerodrome.category, AERODROME_CATEGORIES, rules::CATEGORY_VOCABULARY),
        ("aerodrome.usage", &aerodrome.usage, AERODROME_USAGES, rules::USAGE_VOCABULARY),
    ];

    for (field, value, vocabulary, rule) in coded {
        if let Some(value) = value {
            if !vocabulary.contains(&value.as_str()) {
                warnings.push(
                    ValidationWarning::info(
                        field,
                        rule,
                        format!("Unrecognized code; known values: {}", vocabulary.join(", ")),
                    )
                    .with_value(value.clone()),
                );
            }
        }
    }

    if let Some(hours) = &aerodrome.operating_hours {
        let recognized = hours.split_whitespace().all(|token| {
            OPERATION_CODES.contains(&token) || TIME_RANGE.is_match(token)
        });
        if !recognized {
            warnings.push(
                ValidationWarning::info(
                    "aerodrome.operatingHours",
                    rules::OPERATION_VOCABULARY,
                    format!(
                        "Unrecognized schedule; expected {} or HHMM-HHMM",
                        OPERATION_CODES.join(", ")
                    ),
                )
                .with_value(hours.clone()),
            );
        }
    }

    if let Some(timezone) = &aerodrome.timezone {
        if !TIMEZONE.is_match(timezone) {
            warnings.push(
                ValidationWarning::info(
                    "aerodrome.timezone",
                    rules::TIMEZONE_FORMAT,
                    "Timezones are written as UTC offsets, e.g. 'UTC-3'",
                )
                .with_value(timezone.clone()),
            );
        }
    }
}
