//! Backend port for portfolio, bet and fixture queries.

use async_trait::async_trait;

use crate::domain::{Bet, Fixture, Portfolio};
use crate::error::Result;

/// Read-only access to the betting backend.
///
/// Every call is a single request without retry. Transport and status
/// failures surface as [`crate::error::Error::BackendUnavailable`].
#[async_trait]
pub trait PortfolioBackend: Send + Sync {
    /// All portfolios, active or not, in backend order.
    async fn fetch_portfolios(&self) -> Result<Vec<Portfolio>>;

    /// Bets placed by one portfolio, in backend order.
    async fn fetch_bets(&self, portfolio_id: i64) -> Result<Vec<Bet>>;

    /// Upcoming fixtures that carry odds.
    async fn fetch_upcoming_fixtures(&self) -> Result<Vec<Fixture>>;

    /// Number of unsettled bets for one portfolio.
    async fn fetch_pending_count(&self, portfolio_id: i64) -> Result<u64>;
}
