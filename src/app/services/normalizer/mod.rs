//! Normalization of register text tokens into canonical values
//!
//! Every function in this module is pure: it takes one text token (or a list
//! of tokens) and returns a [`Normalized`] value, i.e. the canonical value when
//! the token could be recognized plus the warnings raised while recognizing
//! it. Nothing here knows about document structure, and nothing here fails:
//! malformed input yields an absent value and a warning.
//!
//! # Modules
//!
//! - [`coordinates`] - Degree/minute/second coordinates in spaced or compact notation
//! - [`measures`] - Elevation pairs, runway dimensions and distance from the city
//! - [`codes`] - Runway designators, PCN, surface and rescue category codes
//! - [`lighting`] - Lighting code tokens and lists
//! - [`frequency`] - Frequency tokens and lists
//!
//! # Field Paths
//!
//! Warnings raised here carry a leaf field name ("coordinates", "dimensions",
//! "lighting", ...). Callers re-root them onto the record path with
//! [`ValidationWarning::under`].

pub mod codes;
pub mod coordinates;
pub mod frequency;
pub mod lighting;
pub mod measures;

#[cfg(test)]
pub mod tests;

use crate::app::models::report::ValidationWarning;

// Re-export the conversion functions for easy access
pub use codes::{normalize_designators, normalize_pcn, normalize_rescue_category, normalize_surface};
pub use coordinates::{Axis, format_coordinate, normalize_coordinate, normalize_coordinate_pair};
pub use frequency::{normalize_frequency, normalize_frequency_tokens};
pub use lighting::{normalize_lighting_code, normalize_lighting_list, normalize_lighting_tokens};
pub use measures::{normalize_city_distance, normalize_dimensions, normalize_elevation};

/// A normalized value together with the warnings raised while producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    /// Canonical value, absent when the token could not be recognized
    pub value: Option<T>,
    /// Warnings raised for this token, in emission order
    pub warnings: Vec<ValidationWarning>,
}

impl<T> Normalized<T> {
    /// A cleanly recognized value
    pub fn ok(value: T) -> Self {
        Self {
            value: Some(value),
            warnings: Vec::new(),
        }
    }

    /// An unrecognized token: no value, one warning
    pub fn failed(warning: ValidationWarning) -> Self {
        Self {
            value: None,
            warnings: vec![warning],
        }
    }

    /// A value kept despite a warning (e.g. a non-conforming PCN preserved verbatim)
    pub fn flagged(value: T, warning: ValidationWarning) -> Self {
        Self {
            value: Some(value),
            warnings: vec![warning],
        }
    }

    /// Check if the value was recognized without warnings
    pub fn is_clean(&self) -> bool {
        self.value.is_some() && self.warnings.is_empty()
    }

    /// Transform the value, keeping the warnings
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Normalized<U> {
        Normalized {
            value: self.value.map(f),
            warnings: self.warnings,
        }
    }

    /// Re-root every warning under a parent field path
    pub fn under(mut self, parent: &str) -> Self {
        self.warnings = self
            .warnings
            .into_iter()
            .map(|warning| warning.under(parent))
            .collect();
        self
    }

    /// Split into the value and the warnings
    pub fn into_parts(self) -> (Option<T>, Vec<ValidationWarning>) {
        (self.value, self.warnings)
    }

    /// Move the warnings into a sink and return the value
    pub fn drain_into(self, sink: &mut Vec<ValidationWarning>) -> Option<T> {
        sink.extend(self.warnings);
        self.value
    }
}

/// Fold independently normalized tokens into one list
///
/// Successes are kept in order, failures contribute only their warnings, and
/// one bad token never prevents the remaining tokens from being normalized.
pub fn fold_tokens<'a, T>(
    tokens: impl IntoIterator<Item = &'a str>,
    normalize: impl Fn(&str) -> Normalized<T>,
) -> Normalized<Vec<T>> {
    let (values, warnings) = tokens.into_iter().map(normalize).fold(
        (Vec::new(), Vec::new()),
        |(mut values, mut warnings), normalized| {
            let (value, token_warnings) = normalized.into_parts();
            values.extend(value);
            warnings.extend(token_warnings);
            (values, warnings)
        },
    );

    Normalized {
        value: Some(values),
        warnings,
    }
}
