//! Field-level change list between two aggregates
//!
//! Collections are compared as a whole through their one-line entity
//! summaries, matching the wholesale replacement policy. Bookkeeping fields
//! (id, timestamps, curated notes) are never reported.

use crate::app::models::aggregate::AerodromeAggregate;
use crate::app::models::report::FieldChange;

/// Compute changes from `existing` to `updated`, in a fixed field order
pub fn diff(existing: &AerodromeAggregate, updated: &AerodromeAggregate) -> Vec<FieldChange> {
    let mut changes = ChangeList::default();

    changes.text("name", Some(&existing.name), Some(&updated.name));
    changes.text("municipality", existing.municipality.as_ref(), updated.municipality.as_ref());
    changes.text("region", existing.region.as_ref(), updated.region.as_ref());
    changes.text("type", existing.aerodrome_type.as_ref(), updated.aerodrome_type.as_ref());
    changes.text("category", existing.category.as_ref(), updated.category.as_ref());
    changes.text("usage", existing.usage.as_ref(), updated.usage.as_ref());
    changes.text("administrator", existing.administrator.as_ref(), updated.administrator.as_ref());
    changes.text("cityDistance", existing.city_distance.as_ref(), updated.city_distance.as_ref());
    changes.number("latitude", existing.latitude, updated.latitude, 6);
    changes.number("longitude", existing.longitude, updated.longitude, 6);
    changes.number("elevationM", existing.elevation_m, updated.elevation_m, 1);
    changes.number("elevationFt", existing.elevation_ft, updated.elevation_ft, 0);
    changes.text("timezone", existing.timezone.as_ref(), updated.timezone.as_ref());
    changes.text("operatingHours", existing.operating_hours.as_ref(), updated.operating_hours.as_ref());
    changes.list("lighting", existing.lighting.iter().cloned(), updated.lighting.iter().cloned());
    changes.text("remarks", existing.remarks.as_ref(), updated.remarks.as_ref());
    changes.text("fir", existing.fir.as_ref(), updated.fir.as_ref());
    changes.text("jurisdiction", existing.jurisdiction.as_ref(), updated.jurisdiction.as_ref());

    changes.list(
        "runways",
        existing.runways.iter().map(|r| r.summary()),
        updated.runways.iter().map(|r| r.summary()),
    );
    changes.list(
        "frequencies",
        existing.frequencies.iter().map(|f| f.summary()),
        updated.frequencies.iter().map(|f| f.summary()),
    );
    changes.list(
        "navaids",
        existing.navaids.iter().map(|n| n.summary()),
        updated.navaids.iter().map(|n| n.summary()),
    );

    let (before, after) = (&existing.services, &updated.services);
    changes.list("services.fuel", before.fuel.iter().cloned(), after.fuel.iter().cloned());
    changes.list(
        "services.maintenance",
        before.maintenance.iter().cloned(),
        after.maintenance.iter().cloned(),
    );
    changes.text(
        "services.rescue",
        before.rescue.map(|r| r.to_string()).as_ref(),
        after.rescue.map(|r| r.to_string()).as_ref(),
    );
    changes.list(
        "services.metContacts",
        before.met_contacts.iter().cloned(),
        after.met_contacts.iter().cloned(),
    );
    changes.list(
        "services.aisContacts",
        before.ais_contacts.iter().cloned(),
        after.ais_contacts.iter().cloned(),
    );
    changes.text("services.remarks", before.remarks.as_ref(), after.remarks.as_ref());
    changes.list(
        "services.notes",
        before.notes.iter().map(|n| format!("{} {}", n.number, n.text)),
        after.notes.iter().map(|n| format!("{} {}", n.number, n.text)),
    );

    changes.list(
        "notices",
        existing.notices.iter().map(|n| n.summary()),
        updated.notices.iter().map(|n| n.summary()),
    );

    changes.0
}

#[derive(Default)]
struct ChangeList(Vec<FieldChange>);

impl ChangeList {
    fn text(&mut self, field: &str, before: Option<&String>, after: Option<&String>) {
        if before != after {
            self.0
                .push(FieldChange::new(field, before.cloned(), after.cloned()));
        }
    }

    fn number(&mut self, field: &str, before: Option<f64>, after: Option<f64>, precision: usize) {
        let render = |value: Option<f64>| value.map(|v| format!("{:.*}", precision, v));
        let (before, after) = (render(before), render(after));
        self.text(field, before.as_ref(), after.as_ref());
    }

    fn list(
        &mut self,
        field: &str,
        before: impl Iterator<Item = String>,
        after: impl Iterator<Item = String>,
    ) {
        let render = |items: Vec<String>| Some(items.join("; ")).filter(|s| !s.is_empty());
        let before = render(before.collect());
        let after = render(after.collect());
        self.text(field, before.as_ref(), after.as_ref());
    }
}
