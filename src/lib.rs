//! Aerodrome Register Ingestion Library
//!
//! A Rust library for converting free-form aerodrome register text (entries
//! extracted from a national aerodrome directory) into validated, structured
//! aerodrome records.
//!
//! This library provides tools for:
//! - Recognizing runway, frequency, navaid, service and temporary-notice fragments
//!   in unstructured register text
//! - Normalizing coordinates, dimensions, PCN, lighting and surface codes
//! - Grading every anomaly as an INFO/WARNING/ERROR validation warning
//! - Projecting records onto a persistent aerodrome aggregate and diffing updates
//! - Running the pipeline per aerodrome or in isolated, order-preserving batches

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod ingest_service;
        pub mod mapper;
        pub mod normalizer;
        pub mod register_parser;
        pub mod validator;
    }
    pub mod adapters {
        pub mod filesystem;
        pub mod repository;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::aggregate::AerodromeAggregate;
pub use app::models::report::{ProcessResult, Severity, ValidationWarning};
pub use app::models::CanonicalRecord;
pub use app::services::ingest_service::IngestService;
pub use config::IngestConfig;

/// Result type alias for the aerodrome ingestion pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for operations outside the advisory validation path
///
/// Format and vocabulary anomalies in register text are never reported
/// through this type; they surface as [`ValidationWarning`] values.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration file '{path}' is not valid TOML: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// JSON (de)serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Repository collaborator failure
    #[error("Repository error: {message}")]
    Repository { message: String },

    /// Input file or directory not found
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Invalid input file pattern
    #[error("Invalid input pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a repository error
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    /// Create an input not found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: String::new(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: "<inline>".to_string(),
            source: error,
        }
    }
}
