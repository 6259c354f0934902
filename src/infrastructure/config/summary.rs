//! Periodic summary settings.

use std::time::Duration;

use serde::Deserialize;

use crate::application::summary::DEFAULT_SUMMARY_INTERVAL;

const fn default_interval_secs() -> u64 {
    DEFAULT_SUMMARY_INTERVAL.as_secs()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Seconds between summaries; read once at startup.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl SummaryConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}
