//! Provider tests for coffee-shop-env
//! Tests the active configuration record handed to consumers

use coffee_shop_env::{
    Auth0Config, ConfigurationError, Environment, EnvironmentConfig, EnvironmentProvider,
};
use std::sync::Arc;
use url::Url;

fn scaffold() -> EnvironmentConfig {
    EnvironmentConfig {
        production: false,
        api_server_url: "http://127.0.0.1:5000".to_string(),
        auth0: Auth0Config {
            url: "breezyauth0.us".to_string(),
            audience: "coffee-shop".to_string(),
            client_id: "aRztBv1O7qJGg41Q8vaK1PIdlUaB3Fxx".to_string(),
            callback_url: "https://127.0.0.1:8100".to_string(),
        },
    }
}

#[test]
fn test_api_server_url_returned_unmodified() {
    let provider = EnvironmentProvider::new(scaffold()).unwrap();
    assert_eq!(provider.get().api_server_url, "http://127.0.0.1:5000");
}

#[test]
fn test_client_id_returned_unmodified() {
    let provider = EnvironmentProvider::new(scaffold()).unwrap();
    assert_eq!(
        provider.get().auth0.client_id,
        "aRztBv1O7qJGg41Q8vaK1PIdlUaB3Fxx"
    );
}

#[test]
fn test_empty_audience_rejected() {
    let mut config = scaffold();
    config.auth0.audience = String::new();

    let err = EnvironmentProvider::new(config).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::MissingField {
            field: "auth0.audience".to_string()
        }
    );
}

#[test]
fn test_relative_api_url_rejected() {
    let mut config = scaffold();
    config.api_server_url = "not-a-url".to_string();

    let err = EnvironmentProvider::new(config).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::InvalidUrl { ref field, ref value, .. }
            if field == "apiServerUrl" && value == "not-a-url"
    ));
}

#[test]
fn test_required_fields_non_empty_and_urls_absolute() {
    for env in Environment::ALL {
        let provider = EnvironmentProvider::new(EnvironmentConfig::variant(env)).unwrap();
        let config = provider.get();

        for value in [
            &config.api_server_url,
            &config.auth0.url,
            &config.auth0.audience,
            &config.auth0.client_id,
            &config.auth0.callback_url,
        ] {
            assert!(!value.trim().is_empty());
        }

        for value in [&config.api_server_url, &config.auth0.callback_url] {
            let url = Url::parse(value).unwrap();
            assert!(url.host_str().is_some(), "{value} has no host");
        }
    }
}

#[test]
fn test_get_is_idempotent_across_threads() {
    let provider = EnvironmentProvider::new(scaffold()).unwrap();
    let first = provider.get();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let provider = provider.clone();
            std::thread::spawn(move || provider.get())
        })
        .collect();

    for handle in handles {
        let seen = handle.join().unwrap();
        assert!(Arc::ptr_eq(&first, &seen));
    }
}

#[test]
fn test_derived_addresses() {
    let provider = EnvironmentProvider::new(scaffold()).unwrap();
    let config = provider.get();

    assert_eq!(config.api_endpoint("drinks"), "http://127.0.0.1:5000/drinks");
    assert_eq!(config.auth0.issuer(), "https://breezyauth0.us.auth0.com/");

    let login = config.auth0.authorize_url("").unwrap();
    let pairs: Vec<(String, String)> = login
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("audience".to_string(), "coffee-shop".to_string())));
    assert!(pairs.contains(&(
        "redirect_uri".to_string(),
        "https://127.0.0.1:8100".to_string()
    )));
}
