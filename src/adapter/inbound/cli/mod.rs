//! CLI module graph and dispatch.

pub mod check;
pub mod command;
pub mod output;
pub mod report;
pub mod run;

use self::command::{Cli, Commands};
use crate::error::Result;
use crate::infrastructure::Config;

/// Load configuration, initialize logging and run the selected subcommand.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    config.init_logging();

    match cli.command {
        Commands::Run => run::execute(config).await,
        Commands::Check => check::execute(&config, &cli.config).await,
        Commands::Report(kind) => report::execute(&config, &kind).await,
    }
}
