//! Validation warnings, field-level diffs and per-item process results
//!
//! Warnings are plain values, never errors: the parser, normalizer and
//! validator return them alongside whatever they managed to extract, and the
//! orchestrator collects them into one [`ProcessResult`] per ingested item.

use super::CanonicalRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity levels for validation warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational, e.g. an unrecognized but plausible vocabulary value
    Info,
    /// May affect data quality
    Warning,
    /// Operationally suspect; signals human review, never blocks the record
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A graded anomaly found while parsing or validating a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    /// Field path, e.g. "runways[0].dimensions"
    pub field: String,

    /// Offending raw value, when there is one
    pub value: Option<String>,

    /// Rule that produced the warning
    pub rule: String,

    pub severity: Severity,

    /// Human-readable suggestion for the reviewer
    pub suggestion: String,
}

impl ValidationWarning {
    /// Create a warning without an offending value
    pub fn new(
        severity: Severity,
        field: impl Into<String>,
        rule: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value: None,
            rule: rule.into(),
            severity,
            suggestion: suggestion.into(),
        }
    }

    /// Create an INFO-level warning
    pub fn info(
        field: impl Into<String>,
        rule: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Info, field, rule, suggestion)
    }

    /// Create a WARNING-level warning
    pub fn warning(
        field: impl Into<String>,
        rule: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, field, rule, suggestion)
    }

    /// Create an ERROR-level warning
    pub fn error(
        field: impl Into<String>,
        rule: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, field, rule, suggestion)
    }

    /// Attach the offending raw value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Re-root the field path under a parent path, e.g. "dimensions" -> "runways[0].dimensions"
    pub fn under(mut self, parent: &str) -> Self {
        self.field = if self.field.is_empty() {
            parent.to_string()
        } else {
            format!("{}.{}", parent, self.field)
        };
        self
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.severity, self.field, self.rule)?;
        if let Some(value) = &self.value {
            write!(f, " '{}'", value)?;
        }
        write!(f, ": {}", self.suggestion)
    }
}

/// One observed change between a stored aggregate and its update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub field: String,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl FieldChange {
    pub fn new(field: impl Into<String>, before: Option<String>, after: Option<String>) -> Self {
        Self {
            field: field.into(),
            before,
            after,
        }
    }
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let before = self.before.as_deref().unwrap_or("<none>");
        let after = self.after.as_deref().unwrap_or("<none>");
        write!(f, "{}: {} -> {}", self.field, before, after)
    }
}

/// Outcome of running the pipeline for one aerodrome entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub success: bool,

    /// Warnings in emission order
    pub warnings: Vec<ValidationWarning>,

    /// Canonical record, absent when parsing failed
    pub record: Option<CanonicalRecord>,

    /// Changes against the previously stored aggregate, when one existed
    pub diff: Option<Vec<FieldChange>>,

    pub icao: String,
    pub dry_run: bool,
    pub message: String,
}

impl ProcessResult {
    /// Create a hard-failure result carrying exactly one ERROR warning
    pub fn hard_failure(
        icao: impl Into<String>,
        dry_run: bool,
        cause: ValidationWarning,
    ) -> Self {
        let message = format!("Processing failed: {}", cause.suggestion);
        Self {
            success: false,
            warnings: vec![cause],
            record: None,
            diff: None,
            icao: icao.into(),
            dry_run,
            message,
        }
    }

    /// Count warnings of a given severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.warnings
            .iter()
            .filter(|warning| warning.severity == severity)
            .count()
    }

    /// Check if any ERROR-severity warning was emitted
    pub fn has_errors(&self) -> bool {
        self.count_by_severity(Severity::Error) > 0
    }
}
