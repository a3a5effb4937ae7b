//! Configuration module for the coffee shop frontend environment

mod auth0;
mod loader;
mod validation;

pub use auth0::{Auth0Config, AUTH0_HOST_SUFFIX};
pub use loader::{canonical_key, ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};

use crate::environment::Environment;
use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use validation::{join_path, require_absolute_url};

/// Statically-defined values of one named variant
#[derive(Debug, Clone, Copy)]
pub struct VariantDefinition {
    pub production: bool,
    pub api_server_url: &'static str,
    pub auth0_url: &'static str,
    pub auth0_audience: &'static str,
    pub auth0_client_id: &'static str,
    pub auth0_callback_url: &'static str,
}

/// Local development against the Flask API and the Ionic dev server
pub const DEVELOPMENT: VariantDefinition = VariantDefinition {
    production: false,
    api_server_url: "http://127.0.0.1:5000",
    auth0_url: "breezyauth0.us",
    auth0_audience: "coffee-shop",
    auth0_client_id: "aRztBv1O7qJGg41Q8vaK1PIdlUaB3Fxx",
    auth0_callback_url: "https://127.0.0.1:8100",
};

/// Deployed build. Placeholder hosts, replaced per deployment.
pub const PRODUCTION: VariantDefinition = VariantDefinition {
    production: true,
    api_server_url: "https://api.coffee-shop.example.com",
    auth0_url: "breezyauth0.us",
    auth0_audience: "coffee-shop",
    auth0_client_id: "aRztBv1O7qJGg41Q8vaK1PIdlUaB3Fxx",
    auth0_callback_url: "https://coffee-shop.example.com",
};

impl From<VariantDefinition> for EnvironmentConfig {
    fn from(def: VariantDefinition) -> Self {
        Self {
            production: def.production,
            api_server_url: def.api_server_url.to_string(),
            auth0: Auth0Config {
                url: def.auth0_url.to_string(),
                audience: def.auth0_audience.to_string(),
                client_id: def.auth0_client_id.to_string(),
                callback_url: def.auth0_callback_url.to_string(),
            },
        }
    }
}

/// Environment configuration consumed by the frontend
///
/// Serialized with the frontend's key names (`apiServerUrl`,
/// `auth0.clientId`, `auth0.callbackURL`). String values are kept exactly as
/// supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Build variant flag
    pub production: bool,

    /// Base URL of the backend API server
    #[serde(rename = "apiServerUrl")]
    pub api_server_url: String,

    /// Identity provider settings
    pub auth0: Auth0Config,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::variant(Environment::default())
    }
}

impl EnvironmentConfig {
    /// Statically-defined record for a named environment
    pub fn variant(environment: Environment) -> Self {
        match environment {
            Environment::Development => DEVELOPMENT.into(),
            Environment::Production => PRODUCTION.into(),
        }
    }

    /// Validate all fields: non-empty strings and absolute URLs
    pub fn validate(&self) -> Result<()> {
        require_absolute_url("apiServerUrl", &self.api_server_url)?;
        self.auth0.validate()
    }

    /// Consume the record, returning it only if it is valid
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Parse a complete record from JSON and validate it
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| ConfigurationError::ParseError {
                details: e.to_string(),
            })?;
        config.validated()
    }

    /// Parse a complete record from TOML and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigurationError::ParseError {
            details: e.to_string(),
        })?;
        config.validated()
    }

    /// Serialize to pretty JSON in the frontend's shape
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigurationError::ParseError {
            details: format!("Failed to serialize config: {e}"),
        })
    }

    /// Serialize to pretty TOML
    pub fn to_toml_pretty(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigurationError::ParseError {
            details: format!("Failed to serialize config: {e}"),
        })
    }

    /// Generate an example configuration file for a variant
    pub fn generate_example(environment: Environment) -> Result<String> {
        Self::variant(environment).to_toml_pretty()
    }

    /// Full URL of a backend endpoint, e.g. `drinks` or `/drinks-detail`
    pub fn api_endpoint(&self, path: &str) -> String {
        join_path(&self.api_server_url, path)
    }

    /// Environment implied by the `production` flag
    pub fn environment(&self) -> Environment {
        if self.production {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}
