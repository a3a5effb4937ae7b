//! Command handlers for the coffee-env CLI
//!
//! Handlers render their output into a `String`; `main` prints it.

pub mod check;
pub mod show;
pub mod urls;
