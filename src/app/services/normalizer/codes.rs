//! Code normalization: runway designators, PCN, surface and rescue category
//!
//! The policies differ on purpose per code:
//! - an invalid designator is dropped (it cannot be partially valid)
//! - a non-conforming PCN is preserved verbatim
//! - an unknown surface abbreviation passes through unchanged

use std::sync::LazyLock;

use regex::Regex;

use super::Normalized;
use crate::app::models::RescueCategory;
use crate::app::models::report::ValidationWarning;
use crate::constants::{SURFACE_ABBREVIATIONS, rules};

static DESIGNATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0[1-9]|[12][0-9]|3[0-6])[LCR]?$").expect("valid designator regex")
});

static PCN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+/[RF]/[ABCD]/[WXYZ]/[TU]$").expect("valid PCN regex")
});

static RESCUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<primary>\d{1,2})(?:\s*/\s*(?P<secondary>\d{1,2}))?$")
        .expect("valid rescue category regex")
});

/// Normalize a designator group such as "09/27" or "17R/35L"
///
/// Each designator is checked independently; invalid ones are dropped with a
/// WARNING each.
pub fn normalize_designators(raw: &str) -> Normalized<Vec<String>> {
    let mut designators = Vec::new();
    let mut warnings = Vec::new();

    for token in raw.split('/').map(str::trim).filter(|t| !t.is_empty()) {
        let token = token.to_uppercase();
        if DESIGNATOR.is_match(&token) {
            designators.push(token);
        } else {
            warnings.push(
                ValidationWarning::warning(
                    "designators",
                    rules::DESIGNATOR_FORMAT,
                    "Runway designators are two-digit headings 01-36 with an optional L/C/R suffix",
                )
                .with_value(token),
            );
        }
    }

    Normalized {
        value: Some(designators),
        warnings,
    }
}

/// Normalize a pavement classification number such as "50/F/B/X/T"
pub fn normalize_pcn(raw: &str) -> Normalized<String> {
    let verbatim = raw.trim();
    let canonical = verbatim.to_uppercase();

    if PCN.is_match(&canonical) {
        Normalized::ok(canonical)
    } else {
        Normalized::flagged(
            verbatim.to_string(),
            ValidationWarning::warning(
                "pcn",
                rules::PCN_FORMAT,
                "PCN kept verbatim; expected 'value/R|F/A-D/W-Z/T|U', e.g. '50/F/B/X/T'",
            )
            .with_value(verbatim),
        )
    }
}

/// Normalize a surface abbreviation via the fixed lookup table
pub fn normalize_surface(raw: &str) -> Normalized<String> {
    let verbatim = raw.trim();
    let key = verbatim.to_uppercase();

    match SURFACE_ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == key)
    {
        Some((_, canonical)) => Normalized::ok((*canonical).to_string()),
        None => Normalized::flagged(
            verbatim.to_string(),
            ValidationWarning::info(
                "surface",
                rules::SURFACE_UNKNOWN,
                "Surface abbreviation not in the lookup table; passed through unchanged",
            )
            .with_value(verbatim),
        ),
    }
}

/// Normalize a rescue and firefighting category pair such as "5/6" or "7"
pub fn normalize_rescue_category(raw: &str) -> Normalized<RescueCategory> {
    let token = raw.trim();
    let parsed = RESCUE.captures(token).and_then(|captures| {
        let primary = captures["primary"].parse().ok()?;
        let secondary = match captures.name("secondary") {
            Some(secondary) => Some(secondary.as_str().parse().ok()?),
            None => None,
        };
        Some(RescueCategory { primary, secondary })
    });

    match parsed {
        Some(category) => Normalized::ok(category),
        None => Normalized::failed(
            ValidationWarning::warning(
                "rescue",
                rules::RESCUE_FORMAT,
                "Expected rescue category as '<category>' or '<category>/<category>'",
            )
            .with_value(token),
        ),
    }
}
