//! Error types for environment configuration

use thiserror::Error;

/// Configuration error type
///
/// Every variant is fatal: a process that cannot build a valid configuration
/// must not start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A required field is absent or blank
    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    /// A URL-typed field does not hold an absolute URL
    #[error("Invalid URL for {field}: '{value}' ({reason})")]
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },

    /// A configuration layer could not be parsed or serialized
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// The variant name is not one of the known environments
    #[error("Unknown environment '{name}' (expected 'development' or 'production')")]
    UnknownEnvironment { name: String },
}

impl ConfigurationError {
    /// Name of the offending field, when the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::InvalidUrl { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(err: figment::Error) -> Self {
        Self::ParseError {
            details: err.to_string(),
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;
