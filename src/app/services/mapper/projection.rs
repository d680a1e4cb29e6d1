//! Canonical record to aggregate projection
//!
//! Absent canonical values stay absent; nothing is coerced to an empty string
//! or zero. Communications flatten to one frequency row per published
//! frequency, so an entry without a usable frequency produces no row.

use crate::app::models::aggregate::{
    AerodromeAggregate, FrequencyEntity, NavaidEntity, NoticeEntity, RunwayEntity, ServiceEntity,
};
use crate::app::models::{
    CanonicalRecord, Communication, Navaid, Runway, Services, TemporaryNotice,
};

/// Project a canonical record onto a fresh, unsaved aggregate
pub fn project(record: &CanonicalRecord) -> AerodromeAggregate {
    let aerodrome = &record.aerodrome;

    AerodromeAggregate {
        id: None,
        icao: aerodrome.icao.clone(),
        name: aerodrome.name.clone(),
        municipality: aerodrome.municipality.clone(),
        region: aerodrome.region.clone(),
        aerodrome_type: aerodrome.aerodrome_type.clone(),
        category: aerodrome.category.clone(),
        usage: aerodrome.usage.clone(),
        administrator: aerodrome.administrator.clone(),
        city_distance: aerodrome.city_distance.as_ref().map(|d| d.to_string()),
        latitude: aerodrome.coordinates.map(|c| c.latitude),
        longitude: aerodrome.coordinates.map(|c| c.longitude),
        elevation_m: aerodrome.elevation.and_then(|e| e.meters),
        elevation_ft: aerodrome.elevation.and_then(|e| e.feet),
        timezone: aerodrome.timezone.clone(),
        operating_hours: aerodrome.operating_hours.clone(),
        lighting: aerodrome.lighting.clone(),
        remarks: join_lines(&aerodrome.remarks),
        fir: aerodrome.airspace.fir.clone(),
        jurisdiction: aerodrome.airspace.jurisdiction.clone(),
        runways: record.runways.iter().map(runway_entity).collect(),
        frequencies: record
            .communications
            .iter()
            .flat_map(frequency_entities)
            .collect(),
        navaids: record.navaids.iter().map(navaid_entity).collect(),
        services: service_entity(&record.services),
        notices: record.temporary_notices.iter().map(notice_entity).collect(),
        curated_notes: None,
        source_document: record.source.document.clone(),
        captured_at: record.source.captured_at,
        created_at: None,
        updated_at: None,
    }
}

fn runway_entity(runway: &Runway) -> RunwayEntity {
    RunwayEntity {
        designator: runway.label(),
        length_m: runway.dimensions.map(|d| d.length),
        width_m: runway.dimensions.map(|d| d.width),
        surface: runway.surface.clone(),
        pcn: runway.pcn.clone(),
        lighting: runway.lighting.clone(),
        threshold_note: runway.threshold_note.clone(),
        remarks: runway.remarks.clone(),
    }
}

fn frequency_entities(communication: &Communication) -> impl Iterator<Item = FrequencyEntity> + '_ {
    let agency = communication.agencies.join("/");
    communication
        .frequencies
        .iter()
        .map(move |frequency| FrequencyEntity {
            agency: agency.clone(),
            callsign: communication.callsign.clone(),
            frequency: *frequency,
            hours: communication.hours.clone(),
            emergency: communication.emergency,
            category: communication.category.to_string(),
        })
}

fn navaid_entity(navaid: &Navaid) -> NavaidEntity {
    NavaidEntity {
        navaid_type: navaid.navaid_type.clone(),
        identifier: navaid.identifier.clone(),
        frequency: navaid.frequency,
        latitude: navaid.coordinates.map(|c| c.latitude),
        longitude: navaid.coordinates.map(|c| c.longitude),
        runway: navaid.runway.clone(),
        category: navaid.category.clone(),
    }
}

fn service_entity(services: &Services) -> ServiceEntity {
    ServiceEntity {
        fuel: services.fuel.clone(),
        maintenance: services.maintenance.clone(),
        rescue: services.rescue,
        met_contacts: services.met_contacts.clone(),
        ais_contacts: services.ais_contacts.clone(),
        remarks: join_lines(&services.remarks),
        notes: services.notes.clone(),
    }
}

fn notice_entity(notice: &TemporaryNotice) -> NoticeEntity {
    NoticeEntity {
        id: notice.id.clone(),
        valid_from: notice.valid_from,
        valid_until: notice.valid_until,
        permanent: notice.permanent,
        text: notice.text.clone(),
    }
}

fn join_lines(lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
