//! `report` subcommand: one reply rendered to the terminal.

use std::sync::Arc;

use super::command::ReportKind;
use crate::adapter::outbound::backend::BackendClient;
use crate::adapter::outbound::console::ConsoleMessenger;
use crate::application::{CommandHandler, CommandOutcome, SummaryReporter};
use crate::domain::Reply;
use crate::error::Result;
use crate::infrastructure::Config;
use crate::port::{ChannelId, Messenger, PortfolioBackend};

const STDOUT: ChannelId = ChannelId(0);

/// Fetch and print the requested report. Backend failures are returned
/// instead of being turned into a chat notice.
pub async fn execute(config: &Config, kind: &ReportKind) -> Result<()> {
    let backend: Arc<dyn PortfolioBackend> =
        Arc::new(BackendClient::from_config(&config.backend));
    let messenger: Arc<dyn Messenger> = Arc::new(ConsoleMessenger::new());

    let Some(command) = kind.as_command() else {
        let reporter = SummaryReporter::new(
            backend,
            Arc::clone(&messenger),
            STDOUT,
            config.summary.interval(),
        );
        if !reporter.summarize().await? {
            messenger
                .send_reply(STDOUT, &Reply::notice("No portfolios found."))
                .await?;
        }
        return Ok(());
    };

    let handler = CommandHandler::new(backend, Arc::clone(&messenger));
    match handler.execute(&command).await {
        CommandOutcome::Resolved(reply) => messenger.send_reply(STDOUT, &reply).await,
        CommandOutcome::Failed(e) => Err(e),
    }
}
