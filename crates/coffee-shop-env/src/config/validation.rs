//! Field-level checks shared by the configuration records

use crate::error::{ConfigurationError, Result};
use crate::url_check::check_absolute_url;
use url::Url;

/// Reject blank values
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Require an absolute URL with a host, e.g. `http://127.0.0.1:5000`
pub(crate) fn require_absolute_url(field: &str, value: &str) -> Result<Url> {
    require_non_empty(field, value)?;

    check_absolute_url(value).map_err(|reason| ConfigurationError::InvalidUrl {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    })
}

/// Join a base URL and a relative path with exactly one `/` between them
pub(crate) fn join_path(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}
