use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{OffLevel, Verbosity};
use coffee_shop_env::{
    compiled_config, compiled_environment, ConfigLoader, Environment, EnvironmentConfig,
    EnvironmentProvider,
};
use std::path::PathBuf;
use tracing::debug;

/// coffee-env - inspect and check coffee shop environment configurations
#[derive(Parser, Debug)]
#[command(
    name = "coffee-env",
    version,
    about = "Inspect and check coffee shop environment configurations",
    long_about = "Resolve the coffee shop frontend environment configuration.

Layers, lowest priority first:
  1. built-in variant (--env development|production)
  2. TOML file (--config, default ./coffee-shop.toml if present)
  3. COFFEE_SHOP_* environment variables (COFFEE_SHOP_AUTH0__CLIENTID, ...)

EXAMPLES:
  coffee-env show --json                  # Resolved record as JSON
  coffee-env --env prod check --expect-production
  coffee-env example > coffee-shop.toml   # Start a config file
  coffee-env urls --redirect-path /tabs/user-page"
)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "COFFEE_SHOP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Environment variant
    #[arg(
        short,
        long = "env",
        global = true,
        env = "COFFEE_SHOP_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: Environment,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Execute the CLI command, returning the text to print
    pub fn run(&self) -> Result<String> {
        debug!("Running {:?} for {}", self.command, self.environment);

        match &self.command {
            Commands::Show => {
                let provider = self.provider()?;
                handlers::show::handle_show(&provider.get(), self.json)
            }
            Commands::Check { expect_production } => {
                handlers::check::handle_check(self.load(), *expect_production, self.json)
            }
            Commands::Example => {
                Ok(EnvironmentConfig::generate_example(self.environment)?)
            }
            Commands::Urls { redirect_path } => {
                let provider = self.provider()?;
                handlers::urls::handle_urls(&provider.get(), redirect_path, self.json)
            }
            Commands::Compiled => handlers::show::handle_compiled(
                compiled_environment(),
                compiled_config(),
                self.json,
            ),
        }
    }

    fn load(&self) -> coffee_shop_env::Result<EnvironmentConfig> {
        match &self.config {
            Some(path) => EnvironmentConfig::load_from_file(self.environment, path),
            None => EnvironmentConfig::load(self.environment, None),
        }
    }

    fn provider(&self) -> Result<EnvironmentProvider> {
        Ok(EnvironmentProvider::new(self.load()?)?)
    }
}
