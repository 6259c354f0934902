//! Inbound Telegram command listener.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{BotCommand as MenuCommand, BotCommandScope, Recipient};
use tracing::info;

use super::auth::{route_message, Route};
use crate::application::command::bot_commands;
use crate::application::notice::send_notice_best_effort;
use crate::application::CommandHandler;
use crate::port::{ChannelId, Messenger};

/// Register bot commands with Telegram for the "/" menu.
///
/// With a debug chat the commands are scoped to that chat, where updates show
/// up immediately. Global registration can take a while to propagate.
pub async fn register_bot_commands(
    bot: &Bot,
    debug_chat_id: Option<i64>,
) -> Result<(), teloxide::RequestError> {
    let commands: Vec<MenuCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| MenuCommand::new(cmd, desc))
        .collect();
    let count = commands.len();

    match debug_chat_id {
        Some(chat_id) => {
            bot.set_my_commands(commands)
                .scope(BotCommandScope::Chat {
                    chat_id: Recipient::Id(ChatId(chat_id)),
                })
                .await?;
            info!(chat_id, count, "Registered bot commands for debug chat");
        }
        None => {
            bot.set_my_commands(commands).await?;
            info!(count, "Registered bot commands globally");
        }
    }
    Ok(())
}

/// Listen for commands until the bot is stopped (Ctrl-C).
pub async fn run_command_listener(
    bot: Bot,
    handler: CommandHandler,
    messenger: Arc<dyn Messenger>,
    allowed_chats: Vec<i64>,
) {
    info!(
        allowed_chats = allowed_chats.len(),
        "Telegram command listener started"
    );

    teloxide::repl(bot, move |msg: Message| {
        let handler = handler.clone();
        let messenger = Arc::clone(&messenger);
        let allowed_chats = allowed_chats.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };
            let channel = ChannelId(msg.chat.id.0);

            match route_message(text, msg.chat.id, &allowed_chats) {
                Route::Ignore => {}
                Route::Execute(command) => {
                    handler.handle(channel, command).await;
                }
                Route::Reject(reply) => {
                    send_notice_best_effort(messenger.as_ref(), channel, &reply).await;
                }
            }

            respond(())
        }
    })
    .await;

    info!("Telegram command listener stopped");
}
