//! Rule engine over canonical records
//!
//! The validator grades every anomaly it finds as an INFO, WARNING or ERROR
//! [`ValidationWarning`]. It never mutates the record, never fails and always
//! returns, so an operationally useful partial record is never discarded
//! because of one bad field.
//!
//! # Modules
//!
//! - [`aerodrome_rules`] - Identity, position, elevation and code vocabularies
//! - [`runway_rules`] - Designator and dimension presence, typical ranges, uniqueness
//! - [`radio_rules`] - Communication and navaid frequency bands
//! - [`service_rules`] - Rescue category bounds, fuel/maintenance codes, notices

pub mod aerodrome_rules;
pub mod radio_rules;
pub mod runway_rules;
pub mod service_rules;

#[cfg(test)]
pub mod tests;

use tracing::debug;

use crate::app::models::CanonicalRecord;
use crate::app::models::report::ValidationWarning;
use crate::config::ValidationConfig;

/// Advisory validator for canonical records
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a record, returning warnings in rule order
    pub fn validate(&self, record: &CanonicalRecord) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        aerodrome_rules::check_aerodrome(&record.aerodrome, &self.config, &mut warnings);
        runway_rules::check_runways(&record.runways, &self.config, &mut warnings);
        radio_rules::check_communications(&record.communications, &mut warnings);
        radio_rules::check_navaids(&record.navaids, &self.config, &mut warnings);
        service_rules::check_services(&record.services, &self.config, &mut warnings);
        service_rules::check_notices(&record.temporary_notices, &mut warnings);

        debug!(
            "Validated {}: {} warnings",
            record.icao(),
            warnings.len()
        );

        warnings
    }
}
