//! Configuration baked in at build time
//!
//! `build.rs` selects the variant from `COFFEE_SHOP_ENVIRONMENT` and may
//! replace individual fields through `COFFEE_SHOP_API_SERVER_URL`,
//! `COFFEE_SHOP_AUTH0_URL`, `COFFEE_SHOP_AUTH0_AUDIENCE`,
//! `COFFEE_SHOP_AUTH0_CLIENT_ID` and `COFFEE_SHOP_AUTH0_CALLBACK_URL`.
//! Blank or malformed values fail the build, so the result is always valid.

use crate::config::EnvironmentConfig;
use crate::environment::Environment;
use once_cell::sync::Lazy;

include!(concat!(env!("OUT_DIR"), "/build_constants.rs"));

static COMPILED: Lazy<EnvironmentConfig> = Lazy::new(|| {
    let mut config = EnvironmentConfig::variant(COMPILED_ENVIRONMENT);

    if let Some(value) = API_SERVER_URL_OVERRIDE {
        config.api_server_url = value.to_string();
    }
    if let Some(value) = AUTH0_URL_OVERRIDE {
        config.auth0.url = value.to_string();
    }
    if let Some(value) = AUTH0_AUDIENCE_OVERRIDE {
        config.auth0.audience = value.to_string();
    }
    if let Some(value) = AUTH0_CLIENT_ID_OVERRIDE {
        config.auth0.client_id = value.to_string();
    }
    if let Some(value) = AUTH0_CALLBACK_URL_OVERRIDE {
        config.auth0.callback_url = value.to_string();
    }

    config
});

/// Environment selected when this crate was built
pub fn compiled_environment() -> Environment {
    COMPILED_ENVIRONMENT
}

/// Record selected when this crate was built, constructed on first use
pub fn compiled_config() -> &'static EnvironmentConfig {
    &COMPILED
}
