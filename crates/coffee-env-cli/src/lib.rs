//! # coffee-env
//!
//! Command-line inspection of the coffee shop environment configuration,
//! meant for build and deployment pipelines:
//! - resolve and print the active record
//! - validate it (optionally asserting a production build)
//! - emit example files and derived addresses

pub mod cli;
pub mod error;

pub use cli::*;
pub use error::*;
