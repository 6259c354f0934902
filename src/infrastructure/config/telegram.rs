//! Telegram bot configuration.

use serde::Deserialize;

/// Telegram bot configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Chat receiving the periodic summary. Unset disables the summary.
    #[serde(default)]
    pub summary_chat_id: Option<i64>,
    /// Register commands for this chat only, so changes show up immediately
    /// during development.
    #[serde(default)]
    pub debug_chat_id: Option<i64>,
    /// Chats allowed to issue commands. Empty allows every chat.
    #[serde(default)]
    pub allowed_chat_ids: Vec<i64>,
    /// Loaded from `BOT_TOKEN` at runtime (never from the config file).
    #[serde(skip)]
    pub bot_token: Option<String>,
}
