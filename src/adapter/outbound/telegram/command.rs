//! Telegram command parsing.

use crate::application::BotCommand;

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    MissingArgument(&'static str),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument(name) => write!(f, "missing argument `{name}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// A `@botname` suffix on the command is ignored. Everything after the
/// command word is the argument, so `/bets Value Hunter` names the
/// portfolio `Value Hunter`.
pub fn parse_command(text: &str) -> Result<BotCommand, CommandParseError> {
    let text = text.trim();
    let (raw_command, rest) = match text.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (text, ""),
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(BotCommand::Start),
        "/help" => Ok(BotCommand::Help),
        "/ping" => Ok(BotCommand::Ping),
        "/portfolios" => Ok(BotCommand::Portfolios),
        "/upcoming" => Ok(BotCommand::Upcoming),
        "/bets" => {
            if rest.is_empty() {
                return Err(CommandParseError::MissingArgument("portfolio name"));
            }
            Ok(BotCommand::Bets {
                portfolio_name: rest.to_string(),
            })
        }
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}
