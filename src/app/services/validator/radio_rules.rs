//! Frequency band rules for communications and navaids

use super::aerodrome_rules::check_position;
use crate::app::models::report::ValidationWarning;
use crate::app::models::{Communication, Navaid};
use crate::config::ValidationConfig;
use crate::constants::{NAVAID_TYPES, bands, rules};

/// Check communication frequencies against the VHF COM and NDB bands
///
/// Frequencies are canonical MHz, so only values published in kHz can land
/// in the NDB band. The emergency frequency lies inside the VHF COM band; its
/// absence is never reported.
pub fn check_communications(
    communications: &[Communication],
    warnings: &mut Vec<ValidationWarning>,
) {
    for (index, communication) in communications.iter().enumerate() {
        let path = format!("communications[{}]", index);

        if communication.frequencies.is_empty() {
            warnings.push(ValidationWarning::warning(
                format!("{}.frequencies", path),
                rules::FREQUENCY_MISSING,
                "Communication entry publishes no usable frequency",
            ));
        }

        for (position, frequency) in communication.frequencies.iter().enumerate() {
            if !bands::within(*frequency, bands::VHF_COM) && !bands::within(*frequency, bands::NDB)
            {
                warnings.push(
                    ValidationWarning::warning(
                        format!("{}.frequencies[{}]", path, position),
                        rules::FREQUENCY_BAND,
                        format!(
                            "Outside the VHF COM band ({} MHz) and the NDB band ({})",
                            bands::format_band(bands::VHF_COM),
                            bands::format_band(bands::NDB)
                        ),
                    )
                    .with_value(bands::format(*frequency)),
                );
            }
        }
    }
}

/// Check navaid types, type-appropriate frequency bands and positions
pub fn check_navaids(
    navaids: &[Navaid],
    config: &ValidationConfig,
    warnings: &mut Vec<ValidationWarning>,
) {
    for (index, navaid) in navaids.iter().enumerate() {
        let path = format!("navaids[{}]", index);

        if !NAVAID_TYPES.contains(&navaid.navaid_type.as_str()) {
            warnings.push(
                ValidationWarning::info(
                    format!("{}.type", path),
                    rules::NAVAID_TYPE_VOCABULARY,
                    format!("Unrecognized navaid type; known types: {}", NAVAID_TYPES.join(", ")),
                )
                .with_value(navaid.navaid_type.clone()),
            );
        }

        if let (Some(frequency), Some((band_name, band))) =
            (navaid.frequency, band_for(&navaid.navaid_type))
        {
            if !bands::within(frequency, band) {
                warnings.push(
                    ValidationWarning::warning(
                        format!("{}.frequency", path),
                        rules::NAVAID_FREQUENCY_BAND,
                        format!(
                            "{} frequencies lie in the {} band ({})",
                            navaid.navaid_type,
                            band_name,
                            bands::format_band(band)
                        ),
                    )
                    .with_value(bands::format(frequency)),
                );
            }
        }

        if let Some(coordinates) = &navaid.coordinates {
            check_position(&format!("{}.coordinates", path), coordinates, config, warnings);
        }
    }
}

/// Band a navaid type transmits in; `None` for channelized or fixed-frequency aids
fn band_for(navaid_type: &str) -> Option<(&'static str, (f64, f64))> {
    let family = navaid_type.split('/').next().unwrap_or(navaid_type);
    match family {
        "NDB" => Some(("NDB", bands::NDB)),
        "VOR" | "VORTAC" | "ILS" | "LOC" | "LLZ" | "DME" => Some(("VHF NAV", bands::VHF_NAV)),
        "GP" | "GS" => Some(("UHF glide path", bands::UHF_GP)),
        "VDF" => Some(("VHF COM", bands::VHF_COM)),
        _ => None,
    }
}
