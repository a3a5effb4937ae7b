//! `show` and `compiled` handlers

use crate::error::Result;
use coffee_shop_env::{Environment, EnvironmentConfig};
use serde_json::json;

/// Render the resolved configuration as TOML, or JSON in the frontend's shape
pub fn handle_show(config: &EnvironmentConfig, json: bool) -> Result<String> {
    if json {
        Ok(config.to_json_pretty()?)
    } else {
        Ok(config.to_toml_pretty()?)
    }
}

/// Render the build-time configuration together with its variant name
pub fn handle_compiled(
    environment: Environment,
    config: &EnvironmentConfig,
    json: bool,
) -> Result<String> {
    if json {
        let value = json!({
            "environment": environment,
            "config": config,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(format!(
        "# compiled environment: {environment}\n{}",
        config.to_toml_pretty()?
    ))
}
