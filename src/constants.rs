//! Application constants for the aerodrome ingestion pipeline
//!
//! This module contains the fixed vocabularies, frequency bands, numbered
//! block assignments, rule names and default values used throughout the
//! parser, normalizer and validator.

// =============================================================================
// Source Document Defaults
// =============================================================================

/// Default source document name recorded on every canonical record
pub const DEFAULT_DOCUMENT_NAME: &str = "ROTAER";

/// Default glob pattern for register entry files
pub const DEFAULT_INPUT_PATTERN: &str = "*.txt";

/// Directory name used under the user data/config directories
pub const APP_DIR_NAME: &str = "aerodrome-ingest";

/// Configuration file name looked up in the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the aggregate storage directory
pub const ENV_DATA_DIR: &str = "AERODROME_INGEST_DATA_DIR";

/// Environment variable overriding the batch worker count
pub const ENV_WORKERS: &str = "AERODROME_INGEST_WORKERS";

/// Environment variable overriding the source document name
pub const ENV_DOCUMENT: &str = "AERODROME_INGEST_DOCUMENT";

// =============================================================================
// Geometry and Unit Conversion
// =============================================================================

/// Default country bounding box (Brazil including oceanic islands)
pub mod bounding_box {
    pub const MIN_LAT: f64 = -34.0;
    pub const MAX_LAT: f64 = 5.5;
    pub const MIN_LON: f64 = -74.0;
    pub const MAX_LON: f64 = -28.5;
}

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.280_84;

/// Default tolerance for the meters/feet elevation cross-check
pub const DEFAULT_ELEVATION_TOLERANCE_FT: f64 = 5.0;

/// Typical operational runway length range in meters
pub const DEFAULT_RUNWAY_LENGTH_RANGE: (u32, u32) = (300, 5000);

/// Typical operational runway width range in meters
pub const DEFAULT_RUNWAY_WIDTH_RANGE: (u32, u32) = (10, 80);

/// Highest rescue and firefighting category
pub const DEFAULT_RESCUE_CATEGORY_MAX: u8 = 10;

/// Lowest rescue and firefighting category
pub const RESCUE_CATEGORY_MIN: u8 = 1;

/// ICAO prefixes identifying domestic aerodromes
pub const DEFAULT_DOMESTIC_PREFIXES: &[&str] = &["SB", "SD", "SI", "SJ", "SN", "SS", "SW"];

// =============================================================================
// Frequency Bands
// =============================================================================

/// Frequency band limits, all in MHz
pub mod bands {
    /// VHF aeronautical communication band
    pub const VHF_COM: (f64, f64) = (118.0, 136.975);

    /// VHF navigation band (VOR, ILS localizer)
    pub const VHF_NAV: (f64, f64) = (108.0, 117.975);

    /// UHF glide path band
    pub const UHF_GP: (f64, f64) = (328.6, 335.4);

    /// Non-directional beacon band (190-1750 kHz)
    pub const NDB: (f64, f64) = (0.190, 1.750);

    /// Values below this are LF/MF and displayed in kHz
    pub const KHZ_DISPLAY_LIMIT: f64 = 30.0;

    /// International aeronautical emergency frequency
    pub const EMERGENCY_MHZ: f64 = 121.5;

    /// Tolerance when comparing frequencies
    pub const EPSILON: f64 = 0.000_5;

    /// Check if a value lies within an inclusive band
    pub fn within(value: f64, band: (f64, f64)) -> bool {
        value >= band.0 - EPSILON && value <= band.1 + EPSILON
    }

    /// Display a MHz value in its published unit, e.g. "127.150" or "375 kHz"
    pub fn format(mhz: f64) -> String {
        if mhz < KHZ_DISPLAY_LIMIT {
            format!("{} kHz", (mhz * 1000.0).round())
        } else {
            format!("{:.3}", mhz)
        }
    }

    /// Display a band in its published unit
    pub fn format_band(band: (f64, f64)) -> String {
        format!("{}-{}", format(band.0).trim_end_matches(" kHz"), format(band.1))
    }
}

// =============================================================================
// Controlled Vocabularies
// =============================================================================

/// Aerodrome type codes
pub const AERODROME_TYPES: &[&str] = &["PUB", "PRIV", "MIL", "PUB/MIL", "PUB/REST"];

/// Aerodrome category codes
pub const AERODROME_CATEGORIES: &[&str] = &["INTL", "DOM", "INTL/DOM"];

/// Aerodrome usage (flight rules) codes
pub const AERODROME_USAGES: &[&str] = &["VFR", "IFR", "VFR/IFR", "IFR/VFR"];

/// Bare operating schedule codes
pub const OPERATION_CODES: &[&str] = &["H24", "HJ", "HN", "HX", "HO", "HS"];

/// Surface abbreviation lookup (register abbreviation, canonical code)
pub const SURFACE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("ASF", "ASPH"),
    ("ASPH", "ASPH"),
    ("ASFALTO", "ASPH"),
    ("CONC", "CONC"),
    ("CON", "CONC"),
    ("CONCRETO", "CONC"),
    ("GRAV", "GRAV"),
    ("CASC", "GRAV"),
    ("CASCALHO", "GRAV"),
    ("GRASS", "GRASS"),
    ("GRAM", "GRASS"),
    ("GRAMA", "GRASS"),
    ("SAIB", "CLAY"),
    ("ARG", "CLAY"),
    ("AREIA", "SAND"),
    ("SAND", "SAND"),
    ("TER", "EARTH"),
    ("TERRA", "EARTH"),
    ("MAC", "MACA"),
    ("WATER", "WATER"),
    ("AGUA", "WATER"),
    ("MTAL", "METAL"),
];

/// Communication agency codes recognized at the start of a frequency line
pub const AGENCY_CODES: &[&str] = &[
    "TWR", "APP", "GND", "ACC", "AFIS", "ATIS", "RDO", "CLR", "DEP", "VOLMET", "MET", "EMERG",
    "UNICOM", "COM", "OPS", "SAR",
];

/// Agency codes categorized as meteorological services
pub const MET_AGENCY_CODES: &[&str] = &["VOLMET", "MET"];

/// Agency codes categorized as air traffic services
pub const ATS_AGENCY_CODES: &[&str] = &[
    "TWR", "APP", "GND", "ACC", "AFIS", "ATIS", "RDO", "CLR", "DEP",
];

/// Agency codes marking an emergency service
pub const EMERGENCY_AGENCY_CODES: &[&str] = &["EMERG", "SAR"];

/// Navaid family prefixes anchoring a navaid line
pub const NAVAID_FAMILIES: &[&str] = &[
    "VOR", "NDB", "DME", "ILS", "LOC", "LLZ", "GP", "GS", "TACAN", "MKR", "OM", "MM", "IM", "VDF",
];

/// Known navaid types
pub const NAVAID_TYPES: &[&str] = &[
    "VOR", "VOR/DME", "DME", "NDB", "ILS", "ILS/DME", "LOC", "GP", "TACAN", "VORTAC", "MKR",
    "OM", "MM", "IM", "VDF",
];

/// Fuel type codes
pub const FUEL_TYPES: &[&str] = &[
    "AVGAS",
    "AVGAS100LL",
    "100LL",
    "JETA",
    "JETA1",
    "JETB",
    "MOGAS",
    "QAV1",
];

/// Maintenance service levels
pub const MAINTENANCE_LEVELS: &[&str] = &["S1", "S2", "S3", "S4"];

/// Values treated as "no information" placeholders in numbered blocks
pub const PLACEHOLDER_VALUES: &[&str] = &["", "-", "--", "---", "NIL", "NONE"];

// =============================================================================
// Temporary Notices
// =============================================================================

/// Temporary notice nature letters as defined for the register
pub mod notice_nature {
    /// Aerodrome
    pub const AERODROME: char = 'A';
    /// Communications
    pub const COMMUNICATIONS: char = 'C';
    /// Facilities
    pub const FACILITIES: char = 'F';
    /// Lighting
    pub const LIGHTING: char = 'L';
    /// Meteorology
    pub const METEOROLOGY: char = 'M';
    /// Navigation aids
    pub const NAVAIDS: char = 'N';
    /// Obstacles
    pub const OBSTACLES: char = 'O';
    /// Runway
    pub const RUNWAY: char = 'R';
    /// Services
    pub const SERVICES: char = 'S';
    /// Warnings
    pub const WARNINGS: char = 'W';

    /// All nature letters
    pub const ALL: &[char] = &[
        AERODROME,
        COMMUNICATIONS,
        FACILITIES,
        LIGHTING,
        METEOROLOGY,
        NAVAIDS,
        OBSTACLES,
        RUNWAY,
        SERVICES,
        WARNINGS,
    ];
}

/// Timestamp format of temporary notice validity bounds
pub const NOTICE_TIMESTAMP_FORMAT: &str = "%y%m%d%H%M";

/// End-of-validity marker for permanent notices
pub const NOTICE_PERMANENT: &str = "PERM";

// =============================================================================
// Numbered Blocks
// =============================================================================

/// Block numbers of the prose section of a register entry
pub mod blocks {
    pub const NAME: u8 = 1;
    pub const MUNICIPALITY: u8 = 2;
    pub const REGION: u8 = 3;
    pub const TYPE: u8 = 4;
    pub const CATEGORY: u8 = 5;
    pub const USAGE: u8 = 6;
    pub const ADMINISTRATOR: u8 = 7;
    pub const CITY_DISTANCE: u8 = 8;
    pub const TIMEZONE: u8 = 9;
    pub const SCHEDULE: u8 = 10;
    pub const LIGHTING: u8 = 11;
    pub const REMARKS: u8 = 12;
    pub const FIR: u8 = 13;
    pub const JURISDICTION: u8 = 14;
}

// =============================================================================
// Rule Names
// =============================================================================

/// Rule identifiers attached to every validation warning
pub mod rules {
    // Parser and normalizer
    pub const EMPTY_INPUT: &str = "empty_input";
    pub const ICAO_HINT_MISMATCH: &str = "icao_hint_mismatch";
    pub const NAME_FALLBACK: &str = "name_fallback";
    pub const DUPLICATE_BLOCK: &str = "duplicate_block";
    pub const COORDINATE_FORMAT: &str = "coordinate_format";
    pub const ELEVATION_FORMAT: &str = "elevation_format";
    pub const DIMENSIONS_FORMAT: &str = "dimensions_format";
    pub const PCN_FORMAT: &str = "pcn_format";
    pub const LIGHTING_FORMAT: &str = "lighting_format";
    pub const DESIGNATOR_FORMAT: &str = "designator_format";
    pub const FREQUENCY_FORMAT: &str = "frequency_format";
    pub const SURFACE_UNKNOWN: &str = "surface_unknown";
    pub const CITY_DISTANCE_FORMAT: &str = "city_distance_format";
    pub const NOTICE_VALIDITY_FORMAT: &str = "notice_validity_format";
    pub const RESCUE_FORMAT: &str = "rescue_format";

    // Validator
    pub const ICAO_FORMAT: &str = "icao_format";
    pub const REGION_FORMAT: &str = "region_format";
    pub const REGION_MISSING: &str = "region_missing";
    pub const COORDINATES_BOUNDS: &str = "coordinates_bounds";
    pub const ELEVATION_CONSISTENCY: &str = "elevation_consistency";
    pub const TYPE_VOCABULARY: &str = "type_vocabulary";
    pub const CATEGORY_VOCABULARY: &str = "category_vocabulary";
    pub const USAGE_VOCABULARY: &str = "usage_vocabulary";
    pub const OPERATION_VOCABULARY: &str = "operation_vocabulary";
    pub const TIMEZONE_FORMAT: &str = "timezone_format";
    pub const RUNWAY_DESIGNATOR_REQUIRED: &str = "runway_designator_required";
    pub const RUNWAY_DIMENSIONS_REQUIRED: &str = "runway_dimensions_required";
    pub const RUNWAY_LENGTH_RANGE: &str = "runway_length_range";
    pub const RUNWAY_WIDTH_RANGE: &str = "runway_width_range";
    pub const RUNWAY_DUPLICATE_DESIGNATOR: &str = "runway_duplicate_designator";
    pub const FREQUENCY_BAND: &str = "frequency_band";
    pub const FREQUENCY_MISSING: &str = "frequency_missing";
    pub const NAVAID_TYPE_VOCABULARY: &str = "navaid_type_vocabulary";
    pub const NAVAID_FREQUENCY_BAND: &str = "navaid_frequency_band";
    pub const RESCUE_CATEGORY_RANGE: &str = "rescue_category_range";
    pub const FUEL_VOCABULARY: &str = "fuel_vocabulary";
    pub const MAINTENANCE_VOCABULARY: &str = "maintenance_vocabulary";
    pub const NOTICE_ID_FORMAT: &str = "notice_id_format";
    pub const NOTICE_NATURE: &str = "notice_nature";
    pub const NOTICE_VALIDITY_ORDER: &str = "notice_validity_order";

    // Orchestrator
    pub const PIPELINE_FAILURE: &str = "pipeline_failure";
    pub const PERSISTENCE_FAILED: &str = "persistence_failed";
    pub const REPOSITORY_LOOKUP_FAILED: &str = "repository_lookup_failed";
}
