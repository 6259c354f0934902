//! On-demand bot commands.
//!
//! Each invocation moves through `Received → Acknowledged → Resolved | Failed`.
//! The acknowledgment goes out before any backend call, and a failure is
//! turned into a short notice for the user instead of data.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, warn};

use super::notice::send_notice_best_effort;
use super::report::{build_bet_list, build_portfolio_overview, build_upcoming_fixtures};
use crate::domain::Reply;
use crate::error::{Error, Result};
use crate::port::{ChannelId, Messenger, PortfolioBackend};

/// Commands understood by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    Ping,
    Portfolios,
    Bets { portfolio_name: String },
    Upcoming,
}

impl BotCommand {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Ping => "ping",
            Self::Portfolios => "portfolios",
            Self::Bets { .. } => "bets",
            Self::Upcoming => "upcoming",
        }
    }

    /// Whether answering requires a backend round trip.
    #[must_use]
    pub const fn needs_backend(&self) -> bool {
        matches!(
            self,
            Self::Portfolios | Self::Bets { .. } | Self::Upcoming
        )
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "📋 Commands\n\n\
    /ping - 🏓 Check that the bot is online\n\
    /portfolios - 📊 Overview of all portfolios\n\
    /bets <portfolio name> - 🎲 Recent bets for one portfolio\n\
    /upcoming - ⚽ Upcoming fixtures with odds\n\
    /help - 📋 Show all commands"
}

/// Commands for platform menu registration as `(command, description)`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ping", "Check that the bot is online"),
        ("portfolios", "Overview of all portfolios"),
        ("bets", "Recent bets for one portfolio"),
        ("upcoming", "Upcoming fixtures with odds"),
        ("help", "Show all commands"),
    ]
}

/// Final state of one command invocation.
#[derive(Debug)]
pub enum CommandOutcome {
    Resolved(Reply),
    Failed(Error),
}

impl CommandOutcome {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Resolved(_) => None,
        }
    }

    /// The reply to send for this outcome.
    #[must_use]
    pub fn reply_for(&self, command: &BotCommand) -> Reply {
        match self {
            Self::Resolved(reply) => reply.clone(),
            Self::Failed(e) => Reply::notice(failure_notice(command, e)),
        }
    }
}

impl From<Result<Reply>> for CommandOutcome {
    fn from(result: Result<Reply>) -> Self {
        match result {
            Ok(reply) => Self::Resolved(reply),
            Err(e) => Self::Failed(e),
        }
    }
}

/// User-facing text for a failed command.
#[must_use]
pub fn failure_notice(command: &BotCommand, error: &Error) -> String {
    match (command, error) {
        (BotCommand::Bets { portfolio_name }, Error::NotFound { .. }) => {
            format!("No portfolio named '{}' was found.", portfolio_name.trim())
        }
        (BotCommand::Portfolios, _) => {
            "Could not fetch portfolios. Check that the backend is running.".to_string()
        }
        (BotCommand::Bets { .. }, _) => {
            "Could not fetch bets. Check that the backend is running.".to_string()
        }
        (BotCommand::Upcoming, _) => "Could not fetch upcoming fixtures.".to_string(),
        _ => "Something went wrong.".to_string(),
    }
}

/// Executes commands against the backend and delivers the replies.
#[derive(Clone)]
pub struct CommandHandler {
    backend: Arc<dyn PortfolioBackend>,
    messenger: Arc<dyn Messenger>,
}

impl CommandHandler {
    #[must_use]
    pub fn new(backend: Arc<dyn PortfolioBackend>, messenger: Arc<dyn Messenger>) -> Self {
        Self { backend, messenger }
    }

    /// Run one command end to end and send its reply to `channel`.
    pub async fn handle(&self, channel: ChannelId, command: BotCommand) -> CommandOutcome {
        debug!(command = %command, channel = %channel, "Command received");

        if command.needs_backend() {
            if let Err(e) = self.messenger.acknowledge(channel).await {
                warn!(command = %command, error = %e, "Failed to acknowledge command");
            }
        }

        let outcome = self.execute(&command).await;
        if let CommandOutcome::Failed(e) = &outcome {
            warn!(command = %command, error = %e, "Command failed");
        }

        let reply = outcome.reply_for(&command);
        if let Err(e) = self.messenger.send_reply(channel, &reply).await {
            error!(command = %command, error = %e, "Failed to send command reply");
            send_notice_best_effort(
                self.messenger.as_ref(),
                channel,
                "Something went wrong while sending the reply.",
            )
            .await;
        }

        outcome
    }

    /// Resolve a command into a reply without sending anything.
    pub async fn execute(&self, command: &BotCommand) -> CommandOutcome {
        let result = match command {
            BotCommand::Start | BotCommand::Help => Ok(Reply::notice(command_help())),
            BotCommand::Ping => Ok(Reply::notice("Pong!")),
            BotCommand::Portfolios => self
                .backend
                .fetch_portfolios()
                .await
                .map(|portfolios| build_portfolio_overview(&portfolios)),
            BotCommand::Bets { portfolio_name } => self.recent_bets(portfolio_name).await,
            BotCommand::Upcoming => self
                .backend
                .fetch_upcoming_fixtures()
                .await
                .map(|fixtures| build_upcoming_fixtures(&fixtures)),
        };
        result.into()
    }

    async fn recent_bets(&self, portfolio_name: &str) -> Result<Reply> {
        let portfolios = self.backend.fetch_portfolios().await?;
        let portfolio = portfolios
            .iter()
            .find(|p| p.name_matches(portfolio_name))
            .ok_or_else(|| Error::NotFound {
                entity: "portfolio",
                name: portfolio_name.trim().to_string(),
            })?;

        let id = portfolio.id.ok_or_else(|| {
            Error::MalformedUpstreamData(format!(
                "portfolio '{}' has no id",
                portfolio.display_name()
            ))
        })?;

        let bets = self.backend.fetch_bets(id).await?;
        Ok(build_bet_list(portfolio, &bets))
    }
}
