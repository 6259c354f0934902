//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::BotCommand;

/// Telegram bot reporting Aracanix betting portfolios
#[derive(Parser, Debug)]
#[command(name = "aracanix-bot")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply when it is missing)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Telegram and serve commands and the periodic summary
    Run,

    /// Validate configuration and check that the backend answers
    Check,

    /// Print one report to stdout without touching Telegram
    #[command(subcommand)]
    Report(ReportKind),
}

/// Subcommands for `aracanix-bot report`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    /// Overview of all portfolios
    Portfolios,
    /// Most recent bets for one portfolio
    Bets {
        /// Portfolio name (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Upcoming fixtures with match-winner odds
    Upcoming,
    /// The periodic portfolio summary
    Summary,
}

impl ReportKind {
    /// The bot command producing the same reply, if there is one.
    #[must_use]
    pub fn as_command(&self) -> Option<BotCommand> {
        match self {
            Self::Portfolios => Some(BotCommand::Portfolios),
            Self::Bets { name } => Some(BotCommand::Bets {
                portfolio_name: name.join(" "),
            }),
            Self::Upcoming => Some(BotCommand::Upcoming),
            Self::Summary => None,
        }
    }
}
