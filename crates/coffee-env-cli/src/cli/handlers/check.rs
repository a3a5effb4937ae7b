//! `check` handler

use crate::error::{CliError, Result};
use coffee_shop_env::{EnvironmentConfig, EnvironmentProvider};
use serde_json::json;
use tracing::info;

/// Validate a loaded configuration, optionally requiring a production build
pub fn handle_check(
    loaded: coffee_shop_env::Result<EnvironmentConfig>,
    expect_production: bool,
    json: bool,
) -> Result<String> {
    let provider = EnvironmentProvider::new(loaded?)?;
    let config = provider.get();

    if expect_production && !config.production {
        return Err(CliError::ProductionMismatch {
            actual: config.production,
        });
    }

    info!("Configuration check passed for {}", config.environment());

    if json {
        let value = json!({
            "valid": true,
            "environment": config.environment(),
            "apiServerUrl": config.api_server_url,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(format!(
        "OK: {} configuration, api {}",
        config.environment(),
        config.api_server_url
    ))
}
