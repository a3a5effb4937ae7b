//! Error types for the coffee-env CLI

use coffee_shop_env::ConfigurationError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// The resolved configuration does not match the expected deployment
    #[error("Expected a production configuration but production={actual}")]
    ProductionMismatch { actual: bool },

    /// Output rendering failed
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
