//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::backend::BackendClient;
use crate::application::SummaryReporter;
use crate::infrastructure::config::settings::Config;
use crate::port::{ChannelId, Messenger, PortfolioBackend};

/// Build the backend client from configuration.
pub fn build_backend(config: &Config) -> Arc<dyn PortfolioBackend> {
    let client = BackendClient::from_config(&config.backend);
    info!(
        base_url = client.base_url(),
        timeout_secs = config.backend.request_timeout_secs,
        "Backend client configured"
    );
    Arc::new(client)
}

/// Build the periodic summary reporter, or `None` when no summary chat is
/// configured.
pub fn build_summary_reporter(
    config: &Config,
    backend: Arc<dyn PortfolioBackend>,
    messenger: Arc<dyn Messenger>,
) -> Option<SummaryReporter> {
    let Some(chat_id) = config.telegram.summary_chat_id else {
        warn!("SUMMARY_CHAT_ID not set, periodic summary disabled");
        return None;
    };

    info!(
        chat_id,
        interval_secs = config.summary.interval_secs,
        "Periodic summary enabled"
    );
    Some(SummaryReporter::new(
        backend,
        messenger,
        ChannelId(chat_id),
        config.summary.interval(),
    ))
}
