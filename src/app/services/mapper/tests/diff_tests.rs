use super::*;
use crate::app::models::report::FieldChange;

#[test]
fn test_identical_aggregates_have_no_changes() {
    let aggregate = project_test_record();
    assert!(Mapper::new().diff(&aggregate, &aggregate).is_empty());
}

#[test]
fn test_bookkeeping_fields_are_not_reported() {
    let existing = project_test_record();
    let mut updated = existing.clone();
    updated.id = Some(3);
    updated.curated_notes = Some("note".to_string());
    updated.updated_at = Some(Utc::now());

    assert!(Mapper::new().diff(&existing, &updated).is_empty());
}

#[test]
fn test_scalar_change_reports_before_and_after() {
    let existing = project_test_record();
    let mut updated = existing.clone();
    updated.name = "AEROPORTO CAMPO DE MARTE".to_string();
    updated.administrator = Some("INFRAERO".to_string());

    let changes = Mapper::new().diff(&existing, &updated);

    assert_eq!(
        changes,
        vec![
            FieldChange::new(
                "name",
                Some("CAMPO DE MARTE".to_string()),
                Some("AEROPORTO CAMPO DE MARTE".to_string())
            ),
            FieldChange::new("administrator", None, Some("INFRAERO".to_string())),
        ]
    );
}

#[test]
fn test_coordinate_noise_below_precision_is_ignored() {
    let existing = project_test_record();
    let mut updated = existing.clone();
    updated.latitude = updated.latitude.map(|lat| lat + 1e-9);

    assert!(Mapper::new().diff(&existing, &updated).is_empty());
}

#[test]
fn test_collection_change_is_reported_as_whole() {
    let mut record = create_test_record();
    record.runways[0].dimensions = Some(RunwayDimensions {
        length: 1700,
        width: 45,
    });
    record.temporary_notices.clear();

    let mapper = Mapper::new();
    let existing = project_test_record();
    let updated = mapper.to_aggregate(Some(&record)).unwrap();
    let changes = mapper.diff(&existing, &updated);

    let fields: Vec<&str> = changes.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, vec!["runways", "notices"]);
    assert_eq!(
        changes[0].after.as_deref(),
        Some("12/30 1700x45 ASPH 30/F/B/X/T L4A(3.00)")
    );
    assert_eq!(changes[1].after, None);
}

fn changed_fields(record: &CanonicalRecord) -> Vec<String> {
    let mapper = Mapper::new();
    let updated = mapper.to_aggregate(Some(record)).unwrap();
    mapper
        .diff(&project_test_record(), &updated)
        .into_iter()
        .map(|change| change.field)
        .collect()
}

#[test]
fn test_runway_lighting_threshold_and_remarks_are_diffed() {
    let mut record = create_test_record();
    record.runways[0].lighting = vec!["L14".to_string()];
    assert_eq!(changed_fields(&record), vec!["runways"]);

    let mut record = create_test_record();
    record.runways[0].threshold_note = Some("30 DISPLACED 300M".to_string());
    assert_eq!(changed_fields(&record), vec!["runways"]);

    let mut record = create_test_record();
    record.runways[0].remarks = Some("CLOSED AT NIGHT".to_string());
    assert_eq!(changed_fields(&record), vec!["runways"]);
}

#[test]
fn test_frequency_hours_and_emergency_are_diffed() {
    let mut record = create_test_record();
    record.communications[0].hours = Some("H24".to_string());
    assert_eq!(changed_fields(&record), vec!["frequencies"]);

    let mut record = create_test_record();
    record.communications[0].emergency = true;
    assert_eq!(changed_fields(&record), vec!["frequencies"]);
}

#[test]
fn test_navaid_position_runway_and_category_are_diffed() {
    let mut record = create_test_record();
    record.navaids[0].coordinates = Some(Coordinates::new(-23.5, -46.6));
    assert_eq!(changed_fields(&record), vec!["navaids"]);

    let mut record = create_test_record();
    record.navaids[0].runway = Some("30".to_string());
    record.navaids[0].category = Some("I".to_string());
    let fields = changed_fields(&record);
    assert_eq!(fields, vec!["navaids"]);
}

#[test]
fn test_service_contacts_remarks_and_notes_are_diffed() {
    let mut record = create_test_record();
    record.services.met_contacts = vec!["met@example.org".to_string()];
    record.services.ais_contacts = vec!["(11) 5090-9100".to_string()];
    record.services.remarks = vec!["Apron lighting limited".to_string()];
    record.services.notes = vec![SupplementaryNote {
        number: 1,
        text: "Helicopter traffic".to_string(),
    }];

    assert_eq!(
        changed_fields(&record),
        vec![
            "services.metContacts",
            "services.aisContacts",
            "services.remarks",
            "services.notes"
        ]
    );
}

#[test]
fn test_notice_validity_and_text_are_diffed() {
    let mut record = create_test_record();
    record.temporary_notices[0].text = "PAPI RWY 30 restored".to_string();
    let mapper = Mapper::new();
    let changes = mapper.diff(
        &project_test_record(),
        &mapper.to_aggregate(Some(&record)).unwrap(),
    );
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0].before.as_deref(),
        Some("L0042/2024 PERM PAPI RWY 30 U/S")
    );

    let mut record = create_test_record();
    record.temporary_notices[0].permanent = false;
    record.temporary_notices[0].valid_until =
        Some(Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 0).unwrap());
    assert_eq!(changed_fields(&record), vec!["notices"]);
}
