//! Measurement normalization: elevation, runway dimensions, distance from city

use std::sync::LazyLock;

use regex::Regex;

use super::Normalized;
use crate::app::models::report::ValidationWarning;
use crate::app::models::{CityDistance, DistanceUnit, Elevation, RunwayDimensions};
use crate::constants::rules;

static ELEVATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<m>\d{1,4}(?:[.,]\d+)?)\s*M?\s*\(\s*(?P<ft>\d{1,5}(?:[.,]\d+)?)\s*(?:FT)?\s*\)$",
    )
    .expect("valid elevation regex")
});

static DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<length>\d{1,5})\s*[X×]\s*(?P<width>\d{1,3})$").expect("valid dimensions regex")
});

static CITY_DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<value>\d{1,4}(?:[.,]\d+)?)\s*(?P<unit>KM|NM)(?:\s+(?P<dir>N|NNE|NE|ENE|E|ESE|SE|SSE|S|SSW|SW|WSW|W|WNW|NW|NNW))?\b",
    )
    .expect("valid city distance regex")
});

/// Normalize an elevation pair "meters (feet)", e.g. "802 (2631)"
pub fn normalize_elevation(raw: &str) -> Normalized<Elevation> {
    let token = raw.trim().to_uppercase();
    let parsed = ELEVATION.captures(&token).and_then(|captures| {
        let meters = parse_decimal(&captures["m"])?;
        let feet = parse_decimal(&captures["ft"])?;
        Some(Elevation {
            meters: Some(meters),
            feet: Some(feet),
        })
    });

    match parsed {
        Some(elevation) => Normalized::ok(elevation),
        None => Normalized::failed(
            ValidationWarning::warning(
                "elevation",
                rules::ELEVATION_FORMAT,
                "Expected elevation as 'meters (feet)', e.g. '802 (2631)'",
            )
            .with_value(raw.trim()),
        ),
    }
}

/// Normalize runway dimensions "LENGTHxWIDTH" in meters, e.g. "2000X45"
pub fn normalize_dimensions(raw: &str) -> Normalized<RunwayDimensions> {
    let token = raw.trim().to_uppercase();
    let parsed = DIMENSIONS.captures(&token).and_then(|captures| {
        Some(RunwayDimensions {
            length: captures["length"].parse().ok()?,
            width: captures["width"].parse().ok()?,
        })
    });

    match parsed {
        Some(dimensions) => Normalized::ok(dimensions),
        None => Normalized::failed(
            ValidationWarning::warning(
                "dimensions",
                rules::DIMENSIONS_FORMAT,
                "Expected runway dimensions as 'LENGTHxWIDTH' in whole meters, e.g. '2000x45'",
            )
            .with_value(raw.trim()),
        ),
    }
}

/// Normalize a distance from the served city, e.g. "8 KM NE" or "4,5 NM S"
pub fn normalize_city_distance(raw: &str) -> Normalized<CityDistance> {
    let token = raw.trim().to_uppercase();
    let parsed = CITY_DISTANCE.captures(&token).and_then(|captures| {
        Some(CityDistance {
            value: parse_decimal(&captures["value"])?,
            unit: captures["unit"].parse::<DistanceUnit>().ok()?,
            direction: captures.name("dir").map(|dir| dir.as_str().to_string()),
        })
    });

    match parsed {
        Some(distance) => Normalized::ok(distance),
        None => Normalized::failed(
            ValidationWarning::warning(
                "cityDistance",
                rules::CITY_DISTANCE_FORMAT,
                "Expected distance from city as '<value> KM|NM <direction>', e.g. '8 KM NE'",
            )
            .with_value(raw.trim()),
        ),
    }
}

/// Parse a decimal accepting either '.' or ',' as separator
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}
