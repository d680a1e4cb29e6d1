//! Tests for numbered block dispatch

use super::*;
use crate::app::models::report::Severity;
use crate::app::services::register_parser::blocks::{apply_block, is_known_block};
use crate::app::services::register_parser::RecordDraft;
use crate::constants::rules;

#[test]
fn test_block_table_covers_fourteen_blocks() {
    assert!((1..=14).all(is_known_block));
    assert!(!is_known_block(0));
    assert!(!is_known_block(15));
}

#[test]
fn test_placeholder_does_not_block_a_later_value() {
    let mut draft = RecordDraft::new();
    apply_block(&mut draft, 1, "NIL");
    apply_block(&mut draft, 1, "---");
    apply_block(&mut draft, 1, "CONGONHAS");

    assert_eq!(draft.name.as_deref(), Some("CONGONHAS"));
    assert!(draft.warnings.is_empty());
}

#[test]
fn test_repeat_after_real_value_is_ignored_with_info() {
    let mut draft = RecordDraft::new();
    apply_block(&mut draft, 2, "SÃO PAULO");
    apply_block(&mut draft, 2, "GUARULHOS");

    assert_eq!(draft.aerodrome.municipality.as_deref(), Some("SÃO PAULO"));
    assert_eq!(draft.warnings.len(), 1);
    assert_eq!(draft.warnings[0].rule, rules::DUPLICATE_BLOCK);
    assert_eq!(draft.warnings[0].severity, Severity::Info);
    assert_eq!(draft.warnings[0].field, "aerodrome.municipality");
}

#[test]
fn test_remarks_accumulate() {
    let mut draft = RecordDraft::new();
    apply_block(&mut draft, 12, "First remark");
    apply_block(&mut draft, 12, "NIL");
    apply_block(&mut draft, 12, "Second remark");

    assert_eq!(draft.aerodrome.remarks, vec!["First remark", "Second remark"]);
    assert!(draft.warnings.is_empty());
}

#[test]
fn test_unknown_block_numbers_are_ignored() {
    let outcome = create_test_parser().parse("SBXX\n1 TEST\n42 answer\n99 bottles", "SBXX");
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_codes_are_compacted_and_uppercased() {
    let mut draft = RecordDraft::new();
    apply_block(&mut draft, 3, "sp");
    apply_block(&mut draft, 4, "pub / mil");
    apply_block(&mut draft, 9, "UTC -3");

    assert_eq!(draft.aerodrome.region.as_deref(), Some("SP"));
    assert_eq!(draft.aerodrome.aerodrome_type.as_deref(), Some("PUB/MIL"));
    assert_eq!(draft.aerodrome.timezone.as_deref(), Some("UTC-3"));
}

#[test]
fn test_unparseable_city_distance_warns_and_stays_open() {
    let mut draft = RecordDraft::new();
    apply_block(&mut draft, 8, "close to downtown");
    apply_block(&mut draft, 8, "5 NM NW");

    assert_eq!(draft.warnings.len(), 1);
    assert_eq!(draft.warnings[0].field, "aerodrome.cityDistance");
    assert_eq!(draft.aerodrome.city_distance.unwrap().to_string(), "5 NM NW");
}

#[test]
fn test_lighting_block_keeps_bad_tokens() {
    let mut draft = RecordDraft::new();
    apply_block(&mut draft, 11, "L12 BEACON L14");

    assert_eq!(draft.aerodrome.lighting, vec!["L12", "BEACON", "L14"]);
    assert_eq!(draft.warnings.len(), 1);
    assert_eq!(draft.warnings[0].field, "aerodrome.lighting");
}
