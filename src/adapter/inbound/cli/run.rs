use tracing::info;

use crate::error::Result;
use crate::infrastructure::Config;

/// Run the bot in the foreground until Ctrl-C.
#[cfg(feature = "telegram")]
pub async fn execute(config: Config) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "aracanix-bot starting");
    crate::infrastructure::runtime::run_bot(config).await?;
    info!("aracanix-bot stopped");
    Ok(())
}

/// Without the `telegram` feature there is no chat platform to run on.
#[cfg(not(feature = "telegram"))]
pub async fn execute(_config: Config) -> Result<()> {
    info!("aracanix-bot built without Telegram support");
    Err(crate::error::ConfigError::InvalidValue {
        field: "features",
        reason: "built without the `telegram` feature".to_string(),
    }
    .into())
}
