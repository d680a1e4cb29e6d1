//! Configuration management and validation.
//!
//! Provides the layered ingestion configuration: built-in defaults, an
//! optional TOML file, environment overrides and finally CLI overrides applied
//! by the command layer. Every section deserializes with `#[serde(default)]`,
//! so a configuration file only needs the keys it changes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::models::Coordinates;
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DOCUMENT_NAME, DEFAULT_DOMESTIC_PREFIXES,
    DEFAULT_ELEVATION_TOLERANCE_FT, DEFAULT_INPUT_PATTERN, DEFAULT_RESCUE_CATEGORY_MAX,
    DEFAULT_RUNWAY_LENGTH_RANGE, DEFAULT_RUNWAY_WIDTH_RANGE, ENV_DATA_DIR, ENV_DOCUMENT,
    ENV_WORKERS, RESCUE_CATEGORY_MIN, bounding_box,
};
use crate::{Error, Result};

/// Complete ingestion configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub parser: ParserConfig,
    pub validation: ValidationConfig,
    pub batch: BatchConfig,
    pub storage: StorageConfig,
}

/// Parser settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Source document name recorded on every canonical record
    pub document_name: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
        }
    }
}

/// Geographic bounding box in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min_lat: bounding_box::MIN_LAT,
            max_lat: bounding_box::MAX_LAT,
            min_lon: bounding_box::MIN_LON,
            max_lon: bounding_box::MAX_LON,
        }
    }
}

impl BoundingBox {
    /// Check if a position lies inside the box (edges included)
    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&coordinates.latitude)
            && (self.min_lon..=self.max_lon).contains(&coordinates.longitude)
    }
}

/// Inclusive integer range used for runway dimension checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeLimits {
    pub min: u32,
    pub max: u32,
}

impl RangeLimits {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl From<(u32, u32)> for RangeLimits {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

/// Validator thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Country limits for aerodrome and navaid positions
    pub bounding_box: BoundingBox,

    /// ICAO prefixes of domestic aerodromes (region code required)
    pub domestic_prefixes: Vec<String>,

    /// Allowed difference between published feet and converted meters
    pub elevation_tolerance_ft: f64,

    /// Typical runway length range in meters
    pub runway_length_m: RangeLimits,

    /// Typical runway width range in meters
    pub runway_width_m: RangeLimits,

    /// Highest valid rescue and firefighting category
    pub rescue_category_max: u8,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            bounding_box: BoundingBox::default(),
            domestic_prefixes: DEFAULT_DOMESTIC_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
            elevation_tolerance_ft: DEFAULT_ELEVATION_TOLERANCE_FT,
            runway_length_m: DEFAULT_RUNWAY_LENGTH_RANGE.into(),
            runway_width_m: DEFAULT_RUNWAY_WIDTH_RANGE.into(),
            rescue_category_max: DEFAULT_RESCUE_CATEGORY_MAX,
        }
    }
}

impl ValidationConfig {
    /// Check if an ICAO code belongs to a domestic aerodrome
    pub fn is_domestic(&self, icao: &str) -> bool {
        self.domestic_prefixes
            .iter()
            .any(|prefix| icao.starts_with(prefix.as_str()))
    }
}

/// Batch execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum items processed concurrently
    pub workers: usize,

    /// Glob pattern selecting entry files when walking directories
    pub input_pattern: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            input_pattern: DEFAULT_INPUT_PATTERN.to_string(),
        }
    }
}

/// Aggregate storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON aggregate per aerodrome
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Default aggregate directory under the user data directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("aggregates")
}

impl IngestConfig {
    /// Default configuration file location (`<config dir>/aerodrome-ingest/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine the user config directory"))
    }

    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        toml::from_str(&content).map_err(|e| Error::config_parse(path.display().to_string(), e))
    }

    /// Load configuration with layered approach (defaults -> file -> environment)
    ///
    /// An explicit file must exist; without one the default location is used
    /// only when present. The result is validated before it is returned.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => {
                    debug!("Using default config file: {}", path.display());
                    Self::from_file(&path)?
                }
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = lookup(ENV_DATA_DIR) {
            debug!("{} overrides data directory: {}", ENV_DATA_DIR, data_dir);
            self.storage.data_dir = PathBuf::from(data_dir);
        }

        if let Some(workers) = lookup(ENV_WORKERS) {
            self.batch.workers = workers.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_WORKERS, workers
                ))
            })?;
        }

        if let Some(document) = lookup(ENV_DOCUMENT) {
            self.parser.document_name = document;
        }

        Ok(())
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.parser.document_name.trim().is_empty() {
            return Err(Error::configuration("Document name must not be empty"));
        }

        if self.batch.workers == 0 {
            return Err(Error::configuration("Worker count must be greater than 0"));
        }

        glob::Pattern::new(&self.batch.input_pattern).map_err(|e| Error::InvalidPattern {
            pattern: self.batch.input_pattern.clone(),
            source: e,
        })?;

        let bbox = &self.validation.bounding_box;
        if bbox.min_lat >= bbox.max_lat || bbox.min_lon >= bbox.max_lon {
            return Err(Error::configuration(format!(
                "Bounding box is inverted: lat {}..{}, lon {}..{}",
                bbox.min_lat, bbox.max_lat, bbox.min_lon, bbox.max_lon
            )));
        }

        for (name, range) in [
            ("runway_length_m", &self.validation.runway_length_m),
            ("runway_width_m", &self.validation.runway_width_m),
        ] {
            if range.min > range.max {
                return Err(Error::configuration(format!(
                    "Range {} is inverted: {} > {}",
                    name, range.min, range.max
                )));
            }
        }

        if self.validation.elevation_tolerance_ft < 0.0 {
            return Err(Error::configuration(
                "Elevation tolerance must not be negative",
            ));
        }

        if self.validation.rescue_category_max < RESCUE_CATEGORY_MIN {
            return Err(Error::configuration(format!(
                "Rescue category maximum must be at least {}",
                RESCUE_CATEGORY_MIN
            )));
        }

        Ok(())
    }

    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.batch.workers = workers;
        self
    }

    /// Set the aggregate storage directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.storage.data_dir = data_dir.into();
        self
    }

    /// Set the input file pattern
    pub fn with_input_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.batch.input_pattern = pattern.into();
        self
    }

    /// Set the source document name
    pub fn with_document_name(mut self, document_name: impl Into<String>) -> Self {
        self.parser.document_name = document_name.into();
        self
    }
}
