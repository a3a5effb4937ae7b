//! Main entry point for coffee-env

use clap::Parser;
use coffee_env_cli::cli::Args;
use coffee_shop_env::logging;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    // Logging stays off unless -v or RUST_LOG asks for it
    let binary_name = env!("CARGO_BIN_NAME").replace('-', "_");
    let default_filter = format!("{binary_name}=info,coffee_env_cli=info,coffee_shop_env=info");
    logging::init_cli_logging(&args.verbosity, &default_filter)
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    let output = args.run()?;
    println!("{output}");
    Ok(())
}
