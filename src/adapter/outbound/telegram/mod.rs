//! Telegram adapter: command listener and messenger.

pub mod auth;
pub mod bot;
pub mod command;
pub mod format;
mod messenger;

pub use bot::{register_bot_commands, run_command_listener};
pub use messenger::TelegramMessenger;
