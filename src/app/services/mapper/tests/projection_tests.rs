use super::*;

#[test]
fn test_absent_record_maps_to_none() {
    assert!(Mapper::new().to_aggregate(None).is_none());
}

#[test]
fn test_scalar_fields_are_projected() {
    let aggregate = project_test_record();

    assert_eq!(aggregate.id, None);
    assert_eq!(aggregate.icao, "SBMT");
    assert_eq!(aggregate.name, "CAMPO DE MARTE");
    assert_eq!(aggregate.municipality.as_deref(), Some("São Paulo"));
    assert_eq!(aggregate.city_distance.as_deref(), Some("5 KM N"));
    assert_eq!(aggregate.latitude, Some(-23.509167));
    assert_eq!(aggregate.elevation_ft, Some(2369.0));
    assert_eq!(
        aggregate.remarks.as_deref(),
        Some("Helicopter ops N of TWY A\nNo glider ops")
    );
    assert_eq!(aggregate.source_document, "ROTAER");
}

#[test]
fn test_absence_is_preserved() {
    let mut record = create_test_record();
    record.aerodrome = AerodromeInfo::new("SBMT", "SBMT");
    record.services = Services::default();

    let aggregate = Mapper::new().to_aggregate(Some(&record)).unwrap();

    assert_eq!(aggregate.municipality, None);
    assert_eq!(aggregate.latitude, None);
    assert_eq!(aggregate.elevation_m, None);
    assert_eq!(aggregate.remarks, None);
    assert_eq!(aggregate.services.remarks, None);
    assert_eq!(aggregate.services.rescue, None);
    assert!(aggregate.lighting.is_empty());
}

#[test]
fn test_runways_keep_order_and_label() {
    let aggregate = project_test_record();

    assert_eq!(aggregate.runways.len(), 1);
    let runway = &aggregate.runways[0];
    assert_eq!(runway.designator, "12/30");
    assert_eq!(runway.length_m, Some(1600));
    assert_eq!(runway.width_m, Some(45));
    assert_eq!(runway.summary(), "12/30 1600x45 ASPH 30/F/B/X/T L4A(3.00)");
}

#[test]
fn test_runway_without_dimensions_maps_to_absent_lengths() {
    let mut record = create_test_record();
    record.runways[0].dimensions = None;

    let aggregate = Mapper::new().to_aggregate(Some(&record)).unwrap();
    assert_eq!(aggregate.runways[0].length_m, None);
    assert_eq!(aggregate.runways[0].width_m, None);
}

#[test]
fn test_communications_flatten_to_frequency_rows() {
    let aggregate = project_test_record();

    // UNICOM publishes no frequency and yields no row
    assert_eq!(aggregate.frequencies.len(), 2);
    assert_eq!(aggregate.frequencies[0].agency, "TWR");
    assert_eq!(aggregate.frequencies[0].frequency, 118.25);
    assert_eq!(aggregate.frequencies[1].frequency, 127.45);
    assert_eq!(aggregate.frequencies[1].hours.as_deref(), Some("0900-2100"));
    assert_eq!(aggregate.frequencies[1].category, "ATS");
    assert_eq!(aggregate.frequencies[0].summary(), "TWR-MT 118.250 0900-2100");
}

#[test]
fn test_navaids_services_and_notices_are_projected() {
    let aggregate = project_test_record();

    assert_eq!(aggregate.navaids[0].summary(), "NDB MTE 350 kHz");
    assert_eq!(aggregate.services.fuel, vec!["AVGAS"]);
    assert_eq!(aggregate.services.rescue.map(|r| r.primary), Some(4));
    assert_eq!(aggregate.notices.len(), 1);
    assert!(aggregate.notices[0].permanent);
    assert_eq!(aggregate.notices[0].id, "L0042/2024");
}

#[test]
fn test_merge_keeps_bookkeeping_and_replaces_collections() {
    let mapper = Mapper::new();
    let mut existing = project_test_record();
    existing.id = Some(7);
    existing.created_at = Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    existing.curated_notes = Some("Operator: prefer RWY 30".to_string());
    existing.runways[0].remarks = Some("curated runway remark".to_string());

    let mut record = create_test_record();
    record.runways[0].dimensions = Some(RunwayDimensions {
        length: 1700,
        width: 45,
    });
    let updated = mapper.to_aggregate(Some(&record)).unwrap();

    let merged = mapper.merge_into(&existing, updated);

    assert_eq!(merged.id, Some(7));
    assert_eq!(merged.created_at, existing.created_at);
    assert_eq!(merged.curated_notes.as_deref(), Some("Operator: prefer RWY 30"));
    assert_eq!(merged.runways[0].length_m, Some(1700));
    assert_eq!(merged.runways[0].remarks, None);
}
