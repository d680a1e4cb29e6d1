//! Coordinate normalization
//!
//! Accepts degree/minute/second coordinates with a hemisphere letter, either
//! space separated ("23 32 52S", "046 38 08W", seconds optional) or compact
//! ("2332.87S", "233252S", "04638.13W"), and converts them to decimal degrees
//! with `deg + min/60 + sec/3600`, negated for S and W.

use std::sync::LazyLock;

use regex::Regex;

use super::Normalized;
use crate::app::models::Coordinates;
use crate::app::models::report::ValidationWarning;
use crate::constants::rules;

const FIELD: &str = "coordinates";

static SPACED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<deg>\d{1,3})\s+(?P<min>\d{1,2}(?:\.\d+)?)(?:\s+(?P<sec>\d{1,2}(?:\.\d+)?))?\s*(?P<hem>[NSEW])$",
    )
    .expect("valid spaced coordinate regex")
});

static COMPACT_LAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<deg>\d{2})(?P<min>\d{2}(?:\.\d+)?)(?P<sec>\d{2}(?:\.\d+)?)?(?P<hem>[NS])$")
        .expect("valid compact latitude regex")
});

static COMPACT_LON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<deg>\d{3})(?P<min>\d{2}(?:\.\d+)?)(?P<sec>\d{2}(?:\.\d+)?)?(?P<hem>[EW])$")
        .expect("valid compact longitude regex")
});

/// Coordinate axis, deciding the accepted hemisphere letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn accepts(self, hemisphere: char) -> bool {
        match self {
            Axis::Latitude => matches!(hemisphere, 'N' | 'S'),
            Axis::Longitude => matches!(hemisphere, 'E' | 'W'),
        }
    }

    fn degree_width(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }

    fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }
}

/// Normalize a single coordinate token for the given axis
pub fn normalize_coordinate(raw: &str, axis: Axis) -> Normalized<f64> {
    match parse_axis(raw, axis) {
        Some(value) => Normalized::ok(value),
        None => Normalized::failed(format_warning(raw)),
    }
}

/// Normalize a "latitude / longitude" pair
///
/// Either component failing yields no coordinate and exactly one ERROR
/// warning carrying the whole raw pair.
pub fn normalize_coordinate_pair(raw: &str) -> Normalized<Coordinates> {
    let parts: Vec<&str> = raw.split('/').map(str::trim).collect();
    if parts.len() != 2 {
        return Normalized::failed(format_warning(raw));
    }

    match (
        parse_axis(parts[0], Axis::Latitude),
        parse_axis(parts[1], Axis::Longitude),
    ) {
        (Some(latitude), Some(longitude)) => Normalized::ok(Coordinates::new(latitude, longitude)),
        _ => Normalized::failed(format_warning(raw)),
    }
}

/// Format decimal degrees back into the spaced notation ("23 32 52S")
///
/// Seconds are printed as whole numbers when they round cleanly, otherwise
/// with two decimals.
pub fn format_coordinate(value: f64, axis: Axis) -> String {
    let (positive, negative) = axis.hemispheres();
    let hemisphere = if value < 0.0 { negative } else { positive };

    let hundredths = (value.abs() * 360_000.0).round() as u64;
    let degrees = hundredths / 360_000;
    let minutes = (hundredths % 360_000) / 6_000;
    let sec_hundredths = hundredths % 6_000;

    let seconds = if sec_hundredths % 100 == 0 {
        format!("{:02}", sec_hundredths / 100)
    } else {
        format!("{:05.2}", sec_hundredths as f64 / 100.0)
    };

    format!(
        "{:0width$} {:02} {}{}",
        degrees,
        minutes,
        seconds,
        hemisphere,
        width = axis.degree_width()
    )
}

/// Parse one axis, returning `None` for anything not recognizable
fn parse_axis(raw: &str, axis: Axis) -> Option<f64> {
    let token = raw.trim().to_uppercase();
    let compact = match axis {
        Axis::Latitude => &*COMPACT_LAT,
        Axis::Longitude => &*COMPACT_LON,
    };

    let captures = SPACED
        .captures(&token)
        .or_else(|| compact.captures(&token))?;

    let hemisphere = captures["hem"].chars().next()?;
    if !axis.accepts(hemisphere) {
        return None;
    }

    let degrees: f64 = captures["deg"].parse().ok()?;
    let minutes: f64 = captures["min"].parse().ok()?;
    let seconds: f64 = match captures.name("sec") {
        Some(sec) => sec.as_str().parse().ok()?,
        None => 0.0,
    };

    if minutes >= 60.0 || seconds >= 60.0 {
        return None;
    }

    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    Some(if matches!(hemisphere, 'S' | 'W') {
        -decimal
    } else {
        decimal
    })
}

fn format_warning(raw: &str) -> ValidationWarning {
    ValidationWarning::error(
        FIELD,
        rules::COORDINATE_FORMAT,
        "Expected 'DD MM SSH / DDD MM SSH' or compact 'DDMM.mmH/DDDMM.mmH' coordinates",
    )
    .with_value(raw.trim())
}
