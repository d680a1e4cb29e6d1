//! Register text parser
//!
//! This module turns the free-form text of one aerodrome register entry into a
//! [`CanonicalRecord`](crate::app::models::CanonicalRecord). The text has no
//! fixed schema, so it is read as an unordered bag of recognizable fragments.
//!
//! # Modules
//!
//! - [`parser`] - Two-pass line classification and the [`RecordParser`] seam
//! - [`patterns`] - Anchored and unanchored line patterns
//! - [`fragments`] - Runway, communication, navaid and temporary notice lines
//! - [`services_section`] - Fuel, maintenance, rescue, contact and note lines
//! - [`blocks`] - Dispatch table for numbered free-text blocks
//! - [`draft`] - The mutable record under construction and identity resolution
//!
//! # Example
//!
//! ```
//! use aerodrome_ingest::app::services::register_parser::AerodromeParser;
//!
//! let parser = AerodromeParser::default();
//! let outcome = parser.parse("SBSP\n1 CONGONHAS\nRWY 17R/35L 1940X45 ASF 52/F/A/X/T", "SBSP");
//! let record = outcome.record.unwrap();
//!
//! assert_eq!(record.aerodrome.name, "CONGONHAS");
//! assert_eq!(record.runways[0].designators, vec!["17R", "35L"]);
//! ```
//!
//! The parser recognizes and normalizes literal shapes only; range and
//! vocabulary checks belong to the validator.

pub mod blocks;
pub mod draft;
pub mod fragments;
pub mod parser;
pub mod patterns;
pub mod services_section;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use draft::RecordDraft;
pub use parser::{AerodromeParser, ParseOutcome, RecordParser};
