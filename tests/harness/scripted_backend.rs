use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use aracanix_bot::domain::{Bet, Fixture, Portfolio};
use aracanix_bot::error::{Error, Result};
use aracanix_bot::port::PortfolioBackend;

use super::CallLog;

#[derive(Default)]
struct Script {
    portfolios: Vec<Portfolio>,
    bets: HashMap<i64, Vec<Bet>>,
    fixtures: Vec<Fixture>,
    pending: HashMap<i64, u64>,
    unavailable: bool,
}

/// In-memory backend answering from a script, logging every call.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    script: Arc<Mutex<Script>>,
    log: CallLog,
}

fn refused(path: &str) -> Error {
    Error::backend(format!("http://backend.test{path}"), "connection refused")
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share `log` with another fake to assert on interleaving.
    pub fn with_log(log: CallLog) -> Self {
        Self {
            script: Arc::default(),
            log,
        }
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn set_portfolios(&self, portfolios: Vec<Portfolio>) {
        self.script.lock().expect("lock script").portfolios = portfolios;
    }

    pub fn set_bets(&self, portfolio_id: i64, bets: Vec<Bet>) {
        self.script
            .lock()
            .expect("lock script")
            .bets
            .insert(portfolio_id, bets);
    }

    pub fn set_fixtures(&self, fixtures: Vec<Fixture>) {
        self.script.lock().expect("lock script").fixtures = fixtures;
    }

    pub fn set_pending(&self, portfolio_id: i64, count: u64) {
        self.script
            .lock()
            .expect("lock script")
            .pending
            .insert(portfolio_id, count);
    }

    /// Every call fails as if the backend were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.script.lock().expect("lock script").unavailable = unavailable;
    }

    pub fn calls(&self, name: &str) -> usize {
        self.log.count(name)
    }

    fn answer<T>(&self, call: &str, path: &str, read: impl FnOnce(&Script) -> T) -> Result<T> {
        self.log.push(call);
        let script = self.script.lock().expect("lock script");
        if script.unavailable {
            return Err(refused(path));
        }
        Ok(read(&script))
    }
}

#[async_trait]
impl PortfolioBackend for ScriptedBackend {
    async fn fetch_portfolios(&self) -> Result<Vec<Portfolio>> {
        self.answer("fetch_portfolios", "/portfolios", |s| s.portfolios.clone())
    }

    async fn fetch_bets(&self, portfolio_id: i64) -> Result<Vec<Bet>> {
        self.answer("fetch_bets", &format!("/portfolios/{portfolio_id}/bets"), |s| {
            s.bets.get(&portfolio_id).cloned().unwrap_or_default()
        })
    }

    async fn fetch_upcoming_fixtures(&self) -> Result<Vec<Fixture>> {
        self.answer(
            "fetch_upcoming_fixtures",
            "/fixtures/upcoming-with-odds",
            |s| s.fixtures.clone(),
        )
    }

    async fn fetch_pending_count(&self, portfolio_id: i64) -> Result<u64> {
        self.answer(
            "fetch_pending_count",
            &format!("/portfolios/{portfolio_id}/bets/count-pending"),
            |s| s.pending.get(&portfolio_id).copied().unwrap_or(0),
        )
    }
}
