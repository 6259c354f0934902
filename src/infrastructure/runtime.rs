//! Bot runtime: wires adapters into services and runs until shutdown.

use std::sync::Arc;

use teloxide::Bot;
use tokio::sync::watch;
use tracing::{info, warn};

use super::bootstrap::{build_backend, build_summary_reporter};
use crate::adapter::outbound::telegram::{
    register_bot_commands, run_command_listener, TelegramMessenger,
};
use crate::application::CommandHandler;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::Messenger;

/// Connect to Telegram and serve until Ctrl-C.
///
/// The command listener and the summary reporter run side by side. When the
/// listener returns, the reporter is told to stop and awaited.
pub async fn run_bot(config: Config) -> Result<()> {
    let bot = Bot::new(config.require_bot_token()?);
    let backend = build_backend(&config);
    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot.clone()));

    match config.telegram.debug_chat_id {
        Some(chat_id) => info!(chat_id, "Development mode: commands scoped to debug chat"),
        None => info!("Production mode: commands registered globally"),
    }
    if let Err(e) = register_bot_commands(&bot, config.telegram.debug_chat_id).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let summary = build_summary_reporter(&config, Arc::clone(&backend), Arc::clone(&messenger))
        .map(|reporter| reporter.spawn(shutdown_rx));

    let handler = CommandHandler::new(backend, Arc::clone(&messenger));
    run_command_listener(
        bot,
        handler,
        messenger,
        config.telegram.allowed_chat_ids.clone(),
    )
    .await;

    info!("Shutdown signal received");
    let _ = shutdown_tx.send(true);
    if let Some(task) = summary {
        if let Err(e) = task.await {
            warn!(error = %e, "Summary task ended abnormally");
        }
    }

    Ok(())
}
