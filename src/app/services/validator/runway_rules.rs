//! Runway presence, range and uniqueness rules

use std::collections::HashSet;

use crate::app::models::Runway;
use crate::app::models::report::ValidationWarning;
use crate::config::ValidationConfig;
use crate::constants::rules;

/// Check every runway, then designator uniqueness across runways
pub fn check_runways(
    runways: &[Runway],
    config: &ValidationConfig,
    warnings: &mut Vec<ValidationWarning>,
) {
    for (index, runway) in runways.iter().enumerate() {
        check_runway(index, runway, config, warnings);
    }

    let mut seen = HashSet::new();
    for (index, runway) in runways.iter().enumerate() {
        for designator in &runway.designators {
            if !seen.insert(designator.as_str()) {
                warnings.push(
                    ValidationWarning::warning(
                        format!("runways[{}].designators", index),
                        rules::RUNWAY_DUPLICATE_DESIGNATOR,
                        "Designator already used by an earlier runway",
                    )
                    .with_value(designator.clone()),
                );
            }
        }
    }
}

fn check_runway(
    index: usize,
    runway: &Runway,
    config: &ValidationConfig,
    warnings: &mut Vec<ValidationWarning>,
) {
    let path = format!("runways[{}]", index);

    if runway.designators.is_empty() {
        warnings.push(ValidationWarning::error(
            format!("{}.designators", path),
            rules::RUNWAY_DESIGNATOR_REQUIRED,
            "Runway has no valid designator",
        ));
    }

    let Some(dimensions) = runway.dimensions else {
        warnings.push(ValidationWarning::error(
            format!("{}.dimensions", path),
            rules::RUNWAY_DIMENSIONS_REQUIRED,
            "Runway has no usable length and width",
        ));
        return;
    };

    let limits = [
        ("length", dimensions.length, config.runway_length_m, rules::RUNWAY_LENGTH_RANGE),
        ("width", dimensions.width, config.runway_width_m, rules::RUNWAY_WIDTH_RANGE),
    ];

    for (name, value, range, rule) in limits {
        if !range.contains(value) {
            warnings.push(
                ValidationWarning::warning(
                    format!("{}.dimensions.{}", path, name),
                    rule,
                    format!(
                        "Runway {} outside the typical {}-{} m range",
                        name, range.min, range.max
                    ),
                )
                .with_value(value.to_string()),
            );
        }
    }
}
