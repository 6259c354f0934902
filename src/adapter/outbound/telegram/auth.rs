//! Chat authorization and routing for incoming Telegram messages.

use teloxide::types::ChatId;
use tracing::warn;

use super::command::{parse_command, CommandParseError};
use crate::application::command::command_help;
use crate::application::BotCommand;

/// What to do with one incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Not a command, or from a chat that may not issue commands.
    Ignore,
    Execute(BotCommand),
    /// A malformed command; reply with this text.
    Reject(String),
}

/// Decide how to handle a message from `incoming_chat`.
///
/// An empty `allowed_chats` list allows every chat.
pub fn route_message(text: &str, incoming_chat: ChatId, allowed_chats: &[i64]) -> Route {
    if !is_authorized_chat(incoming_chat, allowed_chats) {
        return Route::Ignore;
    }

    match parse_command(text) {
        Ok(command) => Route::Execute(command),
        Err(CommandParseError::NotACommand) => Route::Ignore,
        Err(err) => Route::Reject(format!("Invalid command: {err}\n\n{}", command_help())),
    }
}

fn is_authorized_chat(incoming_chat: ChatId, allowed_chats: &[i64]) -> bool {
    if allowed_chats.is_empty() || allowed_chats.contains(&incoming_chat.0) {
        return true;
    }

    warn!(
        chat_id = incoming_chat.0,
        "Ignoring Telegram message from unauthorized chat"
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_from_any_chat_when_unrestricted() {
        assert_eq!(
            route_message("/ping", ChatId(7), &[]),
            Route::Execute(BotCommand::Ping)
        );
    }

    #[test]
    fn unauthorized_chat_is_ignored() {
        assert_eq!(route_message("/ping", ChatId(7), &[42]), Route::Ignore);
        assert_eq!(
            route_message("/portfolios@my_bot", ChatId(-100), &[42]),
            Route::Ignore
        );
    }

    #[test]
    fn negative_group_ids_are_matched() {
        assert_eq!(
            route_message("/upcoming", ChatId(-123_456_789), &[-123_456_789]),
            Route::Execute(BotCommand::Upcoming)
        );
    }

    #[test]
    fn non_command_text_is_ignored() {
        assert_eq!(route_message("hello", ChatId(42), &[42]), Route::Ignore);
        assert_eq!(route_message("", ChatId(42), &[]), Route::Ignore);
    }

    #[test]
    fn invalid_command_gets_error_and_help() {
        let Route::Reject(text) = route_message("/bets", ChatId(42), &[]) else {
            panic!("expected reject");
        };
        assert!(text.starts_with("Invalid command: missing argument `portfolio name`"));
        assert!(text.contains("/portfolios"));

        let Route::Reject(text) = route_message("/status", ChatId(42), &[]) else {
            panic!("expected reject");
        };
        assert!(text.contains("unknown command `/status`"));
    }
}
