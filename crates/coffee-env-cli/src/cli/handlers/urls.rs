//! `urls` handler

use crate::error::Result;
use coffee_shop_env::EnvironmentConfig;
use serde_json::json;

/// Render the addresses consumers derive from the configuration
pub fn handle_urls(config: &EnvironmentConfig, redirect_path: &str, json: bool) -> Result<String> {
    let login = config.auth0.authorize_url(redirect_path)?;

    if json {
        let value = json!({
            "api": config.api_server_url,
            "issuer": config.auth0.issuer(),
            "jwks": config.auth0.jwks_url(),
            "redirect": config.auth0.redirect_uri(redirect_path),
            "login": login.as_str(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok([
        format!("api:      {}", config.api_server_url),
        format!("issuer:   {}", config.auth0.issuer()),
        format!("jwks:     {}", config.auth0.jwks_url()),
        format!("redirect: {}", config.auth0.redirect_uri(redirect_path)),
        format!("login:    {login}"),
    ]
    .join("\n"))
}
