//! Ground service and temporary notice rules

use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::report::ValidationWarning;
use crate::app::models::{Services, TemporaryNotice};
use crate::config::ValidationConfig;
use crate::constants::{FUEL_TYPES, MAINTENANCE_LEVELS, RESCUE_CATEGORY_MIN, notice_nature, rules};

static NOTICE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\d{4}/\d{4}$").expect("valid notice id regex"));

/// Check rescue bounds and fuel/maintenance vocabularies
pub fn check_services(
    services: &Services,
    config: &ValidationConfig,
    warnings: &mut Vec<ValidationWarning>,
) {
    if let Some(rescue) = &services.rescue {
        let limits = RESCUE_CATEGORY_MIN..=config.rescue_category_max;
        let in_range = limits.contains(&rescue.primary)
            && rescue
                .secondary
                .is_none_or(|secondary| limits.contains(&secondary));
        if !in_range {
            warnings.push(
                ValidationWarning::warning(
                    "services.rescue",
                    rules::RESCUE_CATEGORY_RANGE,
                    format!(
                        "Rescue categories range from {} to {}",
                        RESCUE_CATEGORY_MIN, config.rescue_category_max
                    ),
                )
                .with_value(rescue.to_string()),
            );
        }
    }

    check_codes("services.fuel", &services.fuel, FUEL_TYPES, rules::FUEL_VOCABULARY, warnings);
    check_codes(
        "services.maintenance",
        &services.maintenance,
        MAINTENANCE_LEVELS,
        rules::MAINTENANCE_VOCABULARY,
        warnings,
    );
}

fn check_codes(
    field: &str,
    codes: &[String],
    vocabulary: &[&str],
    rule: &str,
    warnings: &mut Vec<ValidationWarning>,
) {
    for (index, code) in codes.iter().enumerate() {
        if !vocabulary.contains(&code.as_str()) {
            warnings.push(
                ValidationWarning::info(
                    format!("{}[{}]", field, index),
                    rule,
                    format!("Unrecognized code; known values: {}", vocabulary.join(", ")),
                )
                .with_value(code.clone()),
            );
        }
    }
}

/// Check notice identifiers, nature letters and validity order
///
/// A malformed identifier yields exactly one ERROR; the nature letter is only
/// checked on identifiers with a valid shape.
pub fn check_notices(notices: &[TemporaryNotice], warnings: &mut Vec<ValidationWarning>) {
    for (index, notice) in notices.iter().enumerate() {
        let path = format!("temporaryNotices[{}]", index);

        if !NOTICE_ID.is_match(&notice.id) {
            warnings.push(
                ValidationWarning::error(
                    format!("{}.id", path),
                    rules::NOTICE_ID_FORMAT,
                    "Notice identifiers are a nature letter, four digits, '/', four digits",
                )
                .with_value(notice.id.clone()),
            );
        } else if !notice
            .id
            .chars()
            .next()
            .is_some_and(|nature| notice_nature::ALL.contains(&nature))
        {
            warnings.push(
                ValidationWarning::error(
                    format!("{}.id", path),
                    rules::NOTICE_NATURE,
                    format!(
                        "Unknown nature letter; expected one of {}",
                        notice_nature::ALL.iter().collect::<String>()
                    ),
                )
                .with_value(notice.id.clone()),
            );
        }

        if let (Some(from), Some(until)) = (notice.valid_from, notice.valid_until) {
            if until < from {
                warnings.push(
                    ValidationWarning::warning(
                        format!("{}.validity", path),
                        rules::NOTICE_VALIDITY_ORDER,
                        "Validity ends before it starts",
                    )
                    .with_value(format!("{} - {}", from, until)),
                );
            }
        }
    }
}
