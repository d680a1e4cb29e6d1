//! Numbered free-text blocks
//!
//! Block numbers map to aerodrome fields through a dispatch table of setter
//! functions applied in text order. A block only fills a field that is still
//! absent; placeholders never count as values, and a repeat after a real value
//! is ignored with an INFO warning.

use tracing::debug;

use super::draft::RecordDraft;
use super::patterns::is_placeholder;
use crate::app::models::report::ValidationWarning;
use crate::app::services::normalizer::{normalize_city_distance, normalize_lighting_list};
use crate::constants::{blocks, rules};

/// Whether a setter filled its field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockFill {
    Filled,
    AlreadySet,
}

type BlockSetter = fn(&mut RecordDraft, &str) -> BlockFill;

struct BlockRule {
    number: u8,
    field: &'static str,
    apply: BlockSetter,
}

static BLOCK_TABLE: &[BlockRule] = &[
    BlockRule { number: blocks::NAME, field: "name", apply: set_name },
    BlockRule { number: blocks::MUNICIPALITY, field: "municipality", apply: set_municipality },
    BlockRule { number: blocks::REGION, field: "region", apply: set_region },
    BlockRule { number: blocks::TYPE, field: "type", apply: set_type },
    BlockRule { number: blocks::CATEGORY, field: "category", apply: set_category },
    BlockRule { number: blocks::USAGE, field: "usage", apply: set_usage },
    BlockRule { number: blocks::ADMINISTRATOR, field: "administrator", apply: set_administrator },
    BlockRule { number: blocks::CITY_DISTANCE, field: "cityDistance", apply: set_city_distance },
    BlockRule { number: blocks::TIMEZONE, field: "timezone", apply: set_timezone },
    BlockRule { number: blocks::SCHEDULE, field: "operatingHours", apply: set_schedule },
    BlockRule { number: blocks::LIGHTING, field: "lighting", apply: set_lighting },
    BlockRule { number: blocks::REMARKS, field: "remarks", apply: append_remark },
    BlockRule { number: blocks::FIR, field: "airspace.fir", apply: set_fir },
    BlockRule { number: blocks::JURISDICTION, field: "airspace.jurisdiction", apply: set_jurisdiction },
];

/// Check if a block number has a field assigned
pub fn is_known_block(number: u8) -> bool {
    BLOCK_TABLE.iter().any(|rule| rule.number == number)
}

/// Apply one numbered block to the draft
///
/// Unknown block numbers are ignored without a warning.
pub fn apply_block(draft: &mut RecordDraft, number: u8, content: &str) {
    let Some(rule) = BLOCK_TABLE.iter().find(|rule| rule.number == number) else {
        return;
    };

    let content = content.trim();
    if is_placeholder(content) {
        debug!("Block {} ({}) holds a placeholder", number, rule.field);
        return;
    }

    if (rule.apply)(draft, content) == BlockFill::AlreadySet {
        draft.warnings.push(
            ValidationWarning::info(
                format!("aerodrome.{}", rule.field),
                rules::DUPLICATE_BLOCK,
                format!(
                    "Block {} repeated after a value was set; the later occurrence is ignored",
                    number
                ),
            )
            .with_value(content),
        );
    }
}

fn fill(slot: &mut Option<String>, value: String) -> BlockFill {
    if slot.is_some() {
        return BlockFill::AlreadySet;
    }
    *slot = Some(value);
    BlockFill::Filled
}

/// Uppercase a code and drop inner whitespace ("pub / mil" -> "PUB/MIL")
fn compact_code(value: &str) -> String {
    value.split_whitespace().collect::<String>().to_uppercase()
}

fn set_name(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.name, value.to_string())
}

fn set_municipality(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.municipality, value.to_string())
}

fn set_region(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.region, compact_code(value))
}

fn set_type(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.aerodrome_type, compact_code(value))
}

fn set_category(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.category, compact_code(value))
}

fn set_usage(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.usage, compact_code(value))
}

fn set_administrator(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.administrator, value.to_string())
}

fn set_city_distance(draft: &mut RecordDraft, value: &str) -> BlockFill {
    if draft.aerodrome.city_distance.is_some() {
        return BlockFill::AlreadySet;
    }
    draft.aerodrome.city_distance =
        normalize_city_distance(value).under("aerodrome").drain_into(&mut draft.warnings);
    BlockFill::Filled
}

fn set_timezone(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.timezone, compact_code(value))
}

fn set_schedule(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.operating_hours, value.to_uppercase())
}

fn set_lighting(draft: &mut RecordDraft, value: &str) -> BlockFill {
    if !draft.aerodrome.lighting.is_empty() {
        return BlockFill::AlreadySet;
    }
    draft.aerodrome.lighting = normalize_lighting_list(value)
        .under("aerodrome")
        .drain_into(&mut draft.warnings)
        .unwrap_or_default();
    BlockFill::Filled
}

fn append_remark(draft: &mut RecordDraft, value: &str) -> BlockFill {
    draft.aerodrome.remarks.push(value.to_string());
    BlockFill::Filled
}

fn set_fir(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.airspace.fir, value.to_uppercase())
}

fn set_jurisdiction(draft: &mut RecordDraft, value: &str) -> BlockFill {
    fill(&mut draft.aerodrome.airspace.jurisdiction, value.to_string())
}
