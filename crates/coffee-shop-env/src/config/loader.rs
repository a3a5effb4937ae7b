//! Layered loading: variant defaults, then a TOML file, then environment variables

use super::EnvironmentConfig;
use crate::environment::Environment;
use crate::error::{ConfigurationError, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File merged over the variant defaults when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "coffee-shop.toml";

/// Prefix of environment variable overrides, e.g. `COFFEE_SHOP_AUTH0__CLIENTID`
pub const ENV_PREFIX: &str = "COFFEE_SHOP_";

/// Loading contract shared by configuration records
pub trait ConfigLoader: Sized {
    /// Load from the default file (or `path`) and the environment
    fn load(environment: Environment, path: Option<PathBuf>) -> Result<Self>;

    /// Load from an explicit file, which must exist, and the environment
    fn load_from_file(environment: Environment, path: &Path) -> Result<Self>;

    /// Merge environment variables with `prefix` over an existing record
    fn apply_env_overrides(config: &mut Self, prefix: &str) -> Result<()>;
}

/// Map an environment variable key onto the record's field path
///
/// Matching ignores case, `_` and `.`, so `API_SERVER_URL`,
/// `apiserverurl` and `AUTH0__CLIENT_ID` all resolve. Keys that name no
/// field return `None`.
pub fn canonical_key(key: &str) -> Option<&'static str> {
    let compact: String = key
        .chars()
        .filter(|c| *c != '_' && *c != '.')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match compact.as_str() {
        "production" => Some("production"),
        "apiserverurl" => Some("apiServerUrl"),
        "auth0url" => Some("auth0.url"),
        "auth0audience" => Some("auth0.audience"),
        "auth0clientid" => Some("auth0.clientId"),
        "auth0callbackurl" => Some("auth0.callbackURL"),
        _ => None,
    }
}

/// Environment layer keyed by the record's own field paths
///
/// Figment's `Env` provider lowercases keys and types values, which loses the
/// camelCase field names and turns `12345` into an integer. Variables are
/// read through it but re-emitted as strings under canonical keys; only
/// `production` is parsed, as a bool.
fn env_layer(prefix: &str) -> Figment {
    let env = Env::prefixed(prefix).split("__");

    let layer = env.iter().fold(Figment::new(), |figment, (key, value)| {
        let Some(field) = canonical_key(key.as_str()) else {
            return figment;
        };
        debug!("Environment override for {}", field);

        match (field, value.trim().parse::<bool>()) {
            ("production", Ok(flag)) => figment.merge(Serialized::default(field, flag)),
            _ => figment.merge(Serialized::default(field, value)),
        }
    });
    layer
}

fn extract(environment: Environment, figment: Figment) -> Result<EnvironmentConfig> {
    let config: EnvironmentConfig = figment.extract()?;
    config.validate()?;

    if config.production != environment.is_production() {
        warn!(
            "Loaded {} configuration with production={}",
            environment, config.production
        );
    }
    info!("Loaded {} environment configuration", environment);
    Ok(config)
}

impl ConfigLoader for EnvironmentConfig {
    fn load(environment: Environment, path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        debug!(
            "Loading {} configuration, file layer: {}",
            environment,
            path.display()
        );

        let figment = Figment::from(Serialized::defaults(Self::variant(environment)))
            .merge(Toml::file(&path))
            .merge(env_layer(ENV_PREFIX));

        extract(environment, figment)
    }

    fn load_from_file(environment: Environment, path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());

        if !path.exists() {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let figment = Figment::from(Serialized::defaults(Self::variant(environment)))
            .merge(Toml::file(path))
            .merge(env_layer(ENV_PREFIX));

        extract(environment, figment)
    }

    fn apply_env_overrides(config: &mut Self, prefix: &str) -> Result<()> {
        let figment =
            Figment::from(Serialized::defaults(config.clone())).merge(env_layer(prefix));

        *config = figment.extract::<Self>()?.validated()?;
        Ok(())
    }
}
