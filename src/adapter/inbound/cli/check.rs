use std::path::Path;

use super::output;
use crate::adapter::outbound::backend::BackendClient;
use crate::error::Result;
use crate::infrastructure::Config;
use crate::port::PortfolioBackend;

/// Validate configuration and check backend reachability without starting the bot.
pub async fn execute(config: &Config, config_path: &Path) -> Result<()> {
    output::section("Configuration");
    if config_path.exists() {
        output::field("Config", config_path.display());
    } else {
        output::field("Config", "defaults (no config file)");
    }
    output::field("Backend", &config.backend.base_url);
    output::field(
        "Summary",
        format!("every {}s", config.summary.interval_secs),
    );

    match config.telegram.summary_chat_id {
        Some(chat_id) => output::field("Summary chat", chat_id),
        None => output::warning("SUMMARY_CHAT_ID not set, periodic summary disabled"),
    }
    if let Some(chat_id) = config.telegram.debug_chat_id {
        output::field("Debug chat", chat_id);
    }
    if config.require_bot_token().is_ok() {
        output::success("Bot token present");
    } else {
        output::warning("BOT_TOKEN not set, `run` will refuse to start");
    }

    output::section("Backend");
    let client = BackendClient::from_config(&config.backend);
    match client.fetch_portfolios().await {
        Ok(portfolios) => {
            let active = portfolios.iter().filter(|p| p.is_active).count();
            output::success(&format!(
                "Backend reachable: {} portfolios ({} active)",
                portfolios.len(),
                active
            ));
            Ok(())
        }
        Err(e) => {
            output::error(&format!("Backend check failed: {e}"));
            Err(e)
        }
    }
}
