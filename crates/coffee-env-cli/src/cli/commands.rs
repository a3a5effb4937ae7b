use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved configuration
    Show,

    /// Load and validate the configuration
    Check {
        /// Fail unless the resolved configuration has production=true
        #[arg(long)]
        expect_production: bool,
    },

    /// Print an example configuration file for the selected environment
    Example,

    /// Print addresses derived from the configuration
    Urls {
        /// Path appended to the callback URL in the login link
        #[arg(long, default_value = "")]
        redirect_path: String,
    },

    /// Show the configuration baked in at build time
    Compiled,
}
