//! Tracing setup for `coffee-env` and other consumers
//!
//! `-v/-q` beats `RUST_LOG`, which beats the caller's default filter.

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter for the given flags, falling back to `RUST_LOG`, then `default_filter`
pub fn build_filter<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<EnvFilter> {
    let filter = if let Some(log_level) = verbosity.log_level() {
        EnvFilter::try_new(log_level.as_str().to_ascii_lowercase())?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };
    Ok(filter)
}

/// Install a compact stderr subscriber
///
/// # Example
///
/// ```no_run
/// use clap_verbosity_flag::{InfoLevel, Verbosity};
/// use coffee_shop_env::logging;
///
/// logging::init_logging(&Verbosity::<InfoLevel>::default(), "coffee_env=info").unwrap();
/// ```
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    let filter = build_filter(verbosity, default_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Like [`init_logging`], but stays silent unless `-v` or `RUST_LOG` is given.
/// Returns whether a subscriber was installed.
pub fn init_cli_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<bool> {
    if verbosity.log_level().is_some() || std::env::var("RUST_LOG").is_ok() {
        init_logging(verbosity, default_filter)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_verbosity_flag::{InfoLevel, OffLevel};

    #[test]
    fn test_flag_level_wins() {
        let verbosity = Verbosity::<InfoLevel>::default();
        let filter = build_filter(&verbosity, "coffee_env=trace").unwrap();
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    #[serial_test::serial]
    fn test_quiet_cli_does_not_install() {
        std::env::remove_var("RUST_LOG");
        let verbosity = Verbosity::<OffLevel>::default();
        assert!(!init_cli_logging(&verbosity, "coffee_env=info").unwrap());
    }
}
