//! Auth0 identity provider configuration

use super::validation::{join_path, require_absolute_url, require_non_empty};
use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Host suffix appended to the tenant prefix
pub const AUTH0_HOST_SUFFIX: &str = ".auth0.com";

/// Auth0 specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth0Config {
    /// Auth0 domain prefix (the tenant, e.g. `breezyauth0.us`)
    pub url: String,

    /// Audience set for the Auth0 API
    pub audience: String,

    /// Client ID generated for the Auth0 application. Public, not a secret.
    #[serde(rename = "clientId")]
    pub client_id: String,

    /// Base URL of the running frontend that Auth0 redirects back to
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl Auth0Config {
    /// Validate every field, reporting the first offending one
    pub fn validate(&self) -> Result<()> {
        require_non_empty("auth0.url", &self.url)?;
        require_non_empty("auth0.audience", &self.audience)?;
        require_non_empty("auth0.clientId", &self.client_id)?;
        require_absolute_url("auth0.callbackURL", &self.callback_url)?;
        Ok(())
    }

    /// Full tenant host, e.g. `breezyauth0.us.auth0.com`
    ///
    /// Accepts a bare prefix as well as a value that already carries the
    /// suffix or a scheme.
    pub fn domain(&self) -> String {
        let host = self
            .url
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');

        if host.ends_with(AUTH0_HOST_SUFFIX) {
            host.to_string()
        } else {
            format!("{host}{AUTH0_HOST_SUFFIX}")
        }
    }

    /// Token issuer, always with a trailing slash
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// JSON Web Key Set location used to verify issued tokens
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    /// Redirect target after login: the callback URL plus an optional path
    pub fn redirect_uri(&self, redirect_path: &str) -> String {
        join_path(&self.callback_url, redirect_path)
    }

    /// Login link for the implicit (`response_type=token`) flow
    pub fn authorize_url(&self, redirect_path: &str) -> Result<Url> {
        let base = format!("https://{}/authorize", self.domain());
        let mut url = Url::parse(&base).map_err(|e| ConfigurationError::InvalidUrl {
            field: "auth0.url".to_string(),
            value: self.url.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri(redirect_path));

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Auth0Config {
        Auth0Config {
            url: "breezyauth0.us".to_string(),
            audience: "coffee-shop".to_string(),
            client_id: "aRztBv1O7qJGg41Q8vaK1PIdlUaB3Fxx".to_string(),
            callback_url: "https://127.0.0.1:8100".to_string(),
        }
    }

    #[test]
    fn test_domain_normalisation() {
        let mut auth0 = sample();
        assert_eq!(auth0.domain(), "breezyauth0.us.auth0.com");

        auth0.url = "https://breezyauth0.us.auth0.com/".to_string();
        assert_eq!(auth0.domain(), "breezyauth0.us.auth0.com");
    }

    #[test]
    fn test_issuer_and_jwks() {
        let auth0 = sample();
        assert_eq!(auth0.issuer(), "https://breezyauth0.us.auth0.com/");
        assert_eq!(
            auth0.jwks_url(),
            "https://breezyauth0.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_authorize_url() {
        let url = sample().authorize_url("/tabs/user-page").unwrap();
        assert_eq!(
            url.as_str(),
            "https://breezyauth0.us.auth0.com/authorize?audience=coffee-shop&response_type=token\
             &client_id=aRztBv1O7qJGg41Q8vaK1PIdlUaB3Fxx\
             &redirect_uri=https%3A%2F%2F127.0.0.1%3A8100%2Ftabs%2Fuser-page"
        );
    }

    #[test]
    fn test_validate_reports_field() {
        let mut auth0 = sample();
        auth0.client_id = String::new();
        assert_eq!(auth0.validate().unwrap_err().field(), Some("auth0.clientId"));

        let mut auth0 = sample();
        auth0.callback_url = "127.0.0.1:8100".to_string();
        assert_eq!(
            auth0.validate().unwrap_err().field(),
            Some("auth0.callbackURL")
        );
    }
}
