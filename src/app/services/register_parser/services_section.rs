//! Ground service lines: fuel, maintenance, rescue, contacts, remarks, notes

use super::patterns::{LIST_SEPARATORS, NOTE_BODY, is_placeholder};
use crate::app::models::report::ValidationWarning;
use crate::app::models::{Services, SupplementaryNote};
use crate::app::services::normalizer::normalize_rescue_category;

/// Apply one service line, keyed by its leading keyword
///
/// `rest` keeps the original case of the line so contacts and prose survive
/// unchanged; code lists are uppercased.
pub fn apply_service_line(
    services: &mut Services,
    key: &str,
    rest: &str,
    warnings: &mut Vec<ValidationWarning>,
) {
    let rest = rest.trim();
    if is_placeholder(rest) {
        return;
    }

    match key {
        "FUEL" | "COMB" => services.fuel.extend(code_list(rest)),
        "MNT" => services.maintenance.extend(code_list(rest)),
        "RFF" | "SCI" => {
            if services.rescue.is_none() {
                services.rescue = normalize_rescue_category(rest)
                    .under("services")
                    .drain_into(warnings);
            }
        }
        "MET" => services.met_contacts.extend(contact_list(rest)),
        "AIS" => services.ais_contacts.extend(contact_list(rest)),
        "RMK" => services.remarks.push(rest.to_string()),
        "NOTE" => services.notes.push(note(rest, services.notes.len())),
        _ => {}
    }
}

fn code_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    LIST_SEPARATORS
        .split(raw)
        .filter(|token| !token.is_empty())
        .map(str::to_uppercase)
}

fn contact_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|contact| !contact.is_empty())
        .map(str::to_string)
}

/// A numbered note; an unnumbered one takes the next sequence number
fn note(raw: &str, existing: usize) -> SupplementaryNote {
    NOTE_BODY
        .captures(raw)
        .and_then(|captures| {
            Some(SupplementaryNote {
                number: captures["number"].parse().ok()?,
                text: captures["text"].trim().to_string(),
            })
        })
        .unwrap_or_else(|| SupplementaryNote {
            number: existing as u32 + 1,
            text: raw.to_string(),
        })
}
