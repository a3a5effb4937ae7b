//! # Coffee Shop Environment
//!
//! Environment configuration for the coffee shop frontend: the backend API
//! base URL, the Auth0 settings and the `production` flag.
//!
//! ## Lifecycle
//!
//! - A variant (`development` or `production`) is selected at build time by
//!   `build.rs`, or explicitly at startup.
//! - [`EnvironmentProvider`] validates the record once and then hands out
//!   shared read-only references through [`EnvironmentProvider::get`].
//! - Invalid values (blank strings, relative or malformed URLs) are fatal:
//!   the build fails, or construction returns a [`ConfigurationError`].

pub mod compiled;
pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod provider;
mod url_check;

pub use compiled::{compiled_config, compiled_environment};
pub use config::{Auth0Config, ConfigLoader, EnvironmentConfig};
pub use environment::Environment;
pub use error::{ConfigurationError, Result};
pub use provider::EnvironmentProvider;
