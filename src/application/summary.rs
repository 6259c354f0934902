//! Periodic portfolio summary.
//!
//! Fires on a fixed interval, fetches all portfolios with their pending-bet
//! counts and posts one aggregate report to the configured channel. A failed
//! cycle posts a best-effort error notice; the loop itself never stops on
//! error, only on shutdown.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use super::notice::send_notice_best_effort;
use super::report::{build_periodic_summary, pending_lookup};
use crate::domain::Reply;
use crate::error::{Error, Result};
use crate::port::{ChannelId, Messenger, PortfolioBackend};

/// Default cadence: every three hours.
pub const DEFAULT_SUMMARY_INTERVAL: Duration = Duration::from_secs(3 * 60 * 60);

/// How one firing of the reporter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Output channel could not be resolved; nothing was fetched.
    Skipped,
    /// Backend has no portfolios; nothing was sent.
    NothingToReport,
    Sent,
    /// The cycle failed and an error notice was attempted.
    ErrorReported,
}

pub struct SummaryReporter {
    backend: Arc<dyn PortfolioBackend>,
    messenger: Arc<dyn Messenger>,
    channel: ChannelId,
    interval: Duration,
}

impl SummaryReporter {
    #[must_use]
    pub fn new(
        backend: Arc<dyn PortfolioBackend>,
        messenger: Arc<dyn Messenger>,
        channel: ChannelId,
        interval: Duration,
    ) -> Self {
        Self {
            backend,
            messenger,
            channel,
            interval,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn [`Self::run`] on the current runtime.
    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }

    /// Fire immediately, then once per interval, until `shutdown` turns true
    /// or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(
            channel = %self.channel,
            interval_secs = self.interval.as_secs(),
            "Periodic summary started"
        );

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    match result {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
                _ = ticker.tick() => {
                    let outcome = self.run_cycle().await;
                    debug!(?outcome, "Summary cycle finished");
                }
            }
        }

        info!("Periodic summary stopped");
    }

    /// One fetch-aggregate-send pass.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let Some(resolved) = self.messenger.resolve_channel(self.channel).await else {
            warn!(
                channel = %self.channel,
                "Summary channel not found, summary will not be sent"
            );
            return CycleOutcome::Skipped;
        };

        info!(
            channel = %resolved.id,
            title = resolved.title.as_deref().unwrap_or_default(),
            "Running scheduled summary"
        );

        match self.summarize().await {
            Ok(true) => CycleOutcome::Sent,
            Ok(false) => {
                debug!("No portfolios, summary suppressed");
                CycleOutcome::NothingToReport
            }
            Err(e) => {
                error!(error = %e, "Scheduled summary failed");
                send_notice_best_effort(
                    self.messenger.as_ref(),
                    self.channel,
                    &format!("🚨 Could not generate the portfolio summary. Error: {e}"),
                )
                .await;
                CycleOutcome::ErrorReported
            }
        }
    }

    /// Fetch, aggregate and send one summary, propagating any failure.
    ///
    /// Returns `false` when there was nothing to report.
    pub async fn summarize(&self) -> Result<bool> {
        let portfolios = self.backend.fetch_portfolios().await?;
        if portfolios.is_empty() {
            return Ok(false);
        }

        let mut counts = HashMap::new();
        for p in portfolios.iter().filter(|p| p.is_active) {
            let id = p.id.ok_or_else(|| {
                Error::MalformedUpstreamData(format!(
                    "portfolio '{}' has no id",
                    p.display_name()
                ))
            })?;
            counts.insert(id, self.backend.fetch_pending_count(id).await?);
        }

        let Some(report) =
            build_periodic_summary(&portfolios, Utc::now(), pending_lookup(&counts))?
        else {
            return Ok(false);
        };

        self.messenger
            .send_reply(self.channel, &Reply::Report(report))
            .await?;
        Ok(true)
    }
}
