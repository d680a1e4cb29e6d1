//! Test utilities for the register parser
//!
//! Provides a parser with a fixed capture timestamp and a complete sample
//! register entry exercising every fragment type and numbered block.

use chrono::{DateTime, TimeZone, Utc};

use crate::app::services::register_parser::AerodromeParser;

// Test modules
mod blocks_tests;
mod parser_tests;

/// Fixed capture timestamp used by test parsers
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

/// Create a parser with a fixed capture timestamp
pub fn create_test_parser() -> AerodromeParser {
    AerodromeParser::new("ROTAER").with_captured_at(fixed_timestamp())
}

/// A complete, well-formed register entry
pub fn sample_entry() -> &'static str {
    r#"SBSP
1 CONGONHAS
2 São Paulo
3 SP
4 PUB
5 INTL
6 VFR/IFR
7 INFRAERO
8 8 KM S
9 UTC-3
10 H24
11 L12, L14
12 Closed to general aviation during peak hours
13 SBBS
14 DECEA
23 37 34S / 046 39 23W
802 (2631)
RWY 17R/35L 1940X45 ASF 52/F/A/X/T L12 L14 L17A(3.00)
RWY 17L/35R 1435X45 ASF 42/F/A/X/T
TWR-SP 127.150 118.050 H24
GND-SP 121.900
ATIS 127.650
APP-SP 119.800
EMERG 121.500
VOR/DME CGO 116.900 23 37 38S / 046 39 25W
ILS ISP 109.300 RWY 17R CAT I
FUEL AVGAS 100LL JETA1
MNT S2
RFF 7
MET (11) 5090-9000; met.sbsp@example.org
AIS (11) 5090-9100
RMK Apron lighting limited after 2200 local
NOTE 1 Helicopter traffic in the vicinity
INFOTEMP R0123/2024 2403010000 2403312359 RWY 17R/35L closed for maintenance
INFOTEMP A0001/2024 2401010000 PERM Bird hazard"#
}
