//! Process-wide holder of the active environment configuration
//!
//! Construct one provider at startup and pass it (or clones of it) to the
//! components that need configuration. Construction validates; afterwards
//! the record is only reachable through shared references.

use crate::compiled::compiled_config;
use crate::config::{ConfigLoader, EnvironmentConfig};
use crate::environment::Environment;
use crate::error::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Owner of the single validated [`EnvironmentConfig`]
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    config: Arc<EnvironmentConfig>,
}

impl EnvironmentProvider {
    /// Validate `config` and take ownership of it
    pub fn new(config: EnvironmentConfig) -> Result<Self> {
        config.validate()?;
        info!(
            production = config.production,
            api_server_url = %config.api_server_url,
            "Environment configuration active"
        );
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Provider for the variant selected at build time
    pub fn compiled() -> Result<Self> {
        Self::new(compiled_config().clone())
    }

    /// Provider for a named variant, layered with file and environment overrides
    pub fn load(environment: Environment, path: Option<PathBuf>) -> Result<Self> {
        Self::new(EnvironmentConfig::load(environment, path)?)
    }

    /// The active configuration; every call returns the same instance
    pub fn get(&self) -> Arc<EnvironmentConfig> {
        Arc::clone(&self.config)
    }
}

impl AsRef<EnvironmentConfig> for EnvironmentProvider {
    fn as_ref(&self) -> &EnvironmentConfig {
        &self.config
    }
}
