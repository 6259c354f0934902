//! Backend REST API client.
//!
//! Four read-only endpoints, all `GET` with JSON bodies:
//! - `/portfolios`
//! - `/portfolios/{id}/bets`
//! - `/portfolios/{id}/bets/count-pending`
//! - `/fixtures/upcoming-with-odds`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{Bet, Fixture, Portfolio};
use crate::error::{Error, Result};
use crate::infrastructure::config::backend::BackendConfig;
use crate::port::PortfolioBackend;

/// HTTP client for the betting backend.
///
/// One request per call, no retry.
pub struct BackendClient {
    http: HttpClient,
    base_url: String,
}

impl BackendClient {
    /// Create a client with the HTTP client's default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &BackendConfig) -> Self {
        let Some(timeout_secs) = config.request_timeout_secs else {
            return Self::new(config.base_url.clone());
        };

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::backend(&url, e))?;
        let response = response
            .error_for_status()
            .map_err(|e| Error::backend(&url, e))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::backend(&url, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            Error::MalformedUpstreamData(format!("unexpected response from {url}: {e}"))
        })
    }
}

#[async_trait]
impl PortfolioBackend for BackendClient {
    async fn fetch_portfolios(&self) -> Result<Vec<Portfolio>> {
        let portfolios: Vec<Portfolio> = self.get_json("/portfolios").await?;
        debug!(count = portfolios.len(), "Fetched portfolios");
        Ok(portfolios)
    }

    async fn fetch_bets(&self, portfolio_id: i64) -> Result<Vec<Bet>> {
        let bets: Vec<Bet> = self
            .get_json(&format!("/portfolios/{portfolio_id}/bets"))
            .await?;
        debug!(portfolio_id, count = bets.len(), "Fetched bets");
        Ok(bets)
    }

    async fn fetch_upcoming_fixtures(&self) -> Result<Vec<Fixture>> {
        let fixtures: Vec<Fixture> = self.get_json("/fixtures/upcoming-with-odds").await?;
        debug!(count = fixtures.len(), "Fetched upcoming fixtures");
        Ok(fixtures)
    }

    async fn fetch_pending_count(&self, portfolio_id: i64) -> Result<u64> {
        self.get_json(&format!("/portfolios/{portfolio_id}/bets/count-pending"))
            .await
    }
}
