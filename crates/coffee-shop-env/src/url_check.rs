//! Value checks shared by `build.rs` and runtime validation

use std::env::{self, VarError};
use url::Url;

/// Read a variable: unset is `None`, a non-UTF-8 value is an error
#[allow(dead_code)] // only the build script reads raw variables
pub(crate) fn read_var(var: &str) -> Result<Option<String>, String> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(format!("{var} is not valid UTF-8")),
    }
}

/// Reject blank values and values with surrounding whitespace
pub(crate) fn check_text(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("blank value".to_string());
    }
    if value.trim() != value {
        return Err("surrounding whitespace".to_string());
    }
    Ok(())
}

/// Require an absolute, hierarchical URL with a non-empty host
pub(crate) fn check_absolute_url(value: &str) -> Result<Url, String> {
    check_text(value)?;

    let url = Url::parse(value).map_err(|e| e.to_string())?;
    if url.cannot_be_a_base() {
        return Err("not a hierarchical URL".to_string());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err("missing host".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        assert!(check_text("coffee-shop").is_ok());
        assert_eq!(check_text("  ").unwrap_err(), "blank value");
        assert_eq!(check_text(" coffee-shop").unwrap_err(), "surrounding whitespace");
        assert_eq!(check_text("coffee-shop\n").unwrap_err(), "surrounding whitespace");
    }

    #[test]
    fn test_whitespace_url_rejected_before_parsing() {
        // Url::parse would strip the spaces and accept this
        assert_eq!(
            check_absolute_url(" http://127.0.0.1:5000").unwrap_err(),
            "surrounding whitespace"
        );
        assert!(check_absolute_url("http://127.0.0.1:5000").is_ok());
    }

    #[test]
    #[serial_test::serial]
    fn test_read_var() {
        env::remove_var("URL_CHECK_READ_VAR_TEST");
        assert_eq!(read_var("URL_CHECK_READ_VAR_TEST").unwrap(), None);

        env::set_var("URL_CHECK_READ_VAR_TEST", "production");
        assert_eq!(
            read_var("URL_CHECK_READ_VAR_TEST").unwrap().as_deref(),
            Some("production")
        );
        env::remove_var("URL_CHECK_READ_VAR_TEST");
    }

    #[cfg(unix)]
    #[test]
    #[serial_test::serial]
    fn test_read_var_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("URL_CHECK_READ_VAR_TEST", OsStr::from_bytes(&[0x66, 0xff]));
        let err = read_var("URL_CHECK_READ_VAR_TEST").unwrap_err();
        env::remove_var("URL_CHECK_READ_VAR_TEST");
        assert_eq!(err, "URL_CHECK_READ_VAR_TEST is not valid UTF-8");
    }

    #[test]
    fn test_non_absolute_urls() {
        assert!(check_absolute_url("not-a-url").is_err());
        assert_eq!(
            check_absolute_url("mailto:barista@example.com").unwrap_err(),
            "not a hierarchical URL"
        );
    }
}
