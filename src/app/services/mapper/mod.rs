//! Projection of canonical records onto the persistent aggregate
//!
//! The mapper is the last pure stage of the pipeline. It flattens a
//! [`CanonicalRecord`] into an [`AerodromeAggregate`], carries repository
//! bookkeeping over from a previously stored aggregate, and reports what an
//! update changes.
//!
//! # Update policy
//!
//! The register is authoritative for everything it publishes: runway,
//! frequency, navaid and notice collections are replaced wholesale on every
//! update. Only the fields the register never supplies (`id`, `created_at`,
//! `curated_notes`) survive from the stored aggregate.
//!
//! # Modules
//!
//! - [`projection`] - Field-by-field record to aggregate projection
//! - [`diff`] - Observational field-level change list

pub mod diff;
pub mod projection;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use diff::diff;
pub use projection::project;

use crate::app::models::CanonicalRecord;
use crate::app::models::aggregate::AerodromeAggregate;
use crate::app::models::report::FieldChange;

/// Record to aggregate mapper
#[derive(Debug, Clone, Copy, Default)]
pub struct Mapper;

impl Mapper {
    pub fn new() -> Self {
        Self
    }

    /// Project a record; `None` only when there is no record
    pub fn to_aggregate(&self, record: Option<&CanonicalRecord>) -> Option<AerodromeAggregate> {
        record.map(project)
    }

    /// Field-level changes from `existing` to `updated`
    pub fn diff(
        &self,
        existing: &AerodromeAggregate,
        updated: &AerodromeAggregate,
    ) -> Vec<FieldChange> {
        diff(existing, updated)
    }

    /// Carry repository bookkeeping from a stored aggregate onto a fresh projection
    pub fn merge_into(
        &self,
        existing: &AerodromeAggregate,
        mut updated: AerodromeAggregate,
    ) -> AerodromeAggregate {
        updated.id = existing.id;
        updated.created_at = existing.created_at;
        updated.updated_at = existing.updated_at;
        updated.curated_notes = existing.curated_notes.clone();
        updated
    }
}
