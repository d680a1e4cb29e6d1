//! Test utilities for the normalizer
//!
//! Shared assertion helpers for tolerance comparisons and warning checks used
//! across the per-normalizer test modules.

use crate::app::models::report::{Severity, ValidationWarning};

mod coordinates_tests;
mod frequency_tests;

/// Tolerance for decimal degree comparisons (about 0.4 m)
pub const DEGREE_TOLERANCE: f64 = 0.000_005;

/// Assert two floats are equal within a tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}

/// Assert a warning list holds exactly one warning with the given rule and severity
pub fn assert_single_warning(warnings: &[ValidationWarning], rule: &str, severity: Severity) {
    assert_eq!(warnings.len(), 1, "unexpected warnings: {:?}", warnings);
    assert_eq!(warnings[0].rule, rule);
    assert_eq!(warnings[0].severity, severity);
}
