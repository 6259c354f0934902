//! Telegram implementation of the messenger port.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ParseMode};
use tracing::{debug, warn};

use super::format::{message_len, render_report, truncate_message, MAX_MESSAGE_UNITS};
use crate::domain::Reply;
use crate::error::{Error, Result};
use crate::port::{ChannelId, Messenger, ResolvedChannel};

/// Sends replies through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn delivery(err: teloxide::RequestError) -> Error {
    Error::DeliveryFailure(err.to_string())
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn resolve_channel(&self, channel: ChannelId) -> Option<ResolvedChannel> {
        match self.bot.get_chat(ChatId(channel.0)).await {
            Ok(chat) => Some(ResolvedChannel {
                id: channel,
                title: chat.title().map(str::to_string),
            }),
            Err(e) => {
                warn!(chat_id = channel.0, error = %e, "Failed to resolve Telegram chat");
                None
            }
        }
    }

    async fn acknowledge(&self, channel: ChannelId) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(channel.0), ChatAction::Typing)
            .await
            .map_err(delivery)?;
        Ok(())
    }

    async fn send_reply(&self, channel: ChannelId, reply: &Reply) -> Result<()> {
        let chat = ChatId(channel.0);
        let request = match reply {
            Reply::Report(report) => {
                let text = render_report(report);
                if message_len(&text) <= MAX_MESSAGE_UNITS {
                    self.bot.send_message(chat, text).parse_mode(ParseMode::MarkdownV2)
                } else {
                    // Cutting MarkdownV2 could split an entity, so fall back to plain text.
                    debug!(chat_id = channel.0, "Report too long, sending plain text");
                    let plain = truncate_message(&report.to_string(), MAX_MESSAGE_UNITS);
                    self.bot.send_message(chat, plain)
                }
            }
            Reply::Notice(text) => self.bot.send_message(chat, text.clone()),
        };

        request.await.map_err(delivery)?;
        Ok(())
    }
}
