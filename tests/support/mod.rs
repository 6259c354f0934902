#![allow(dead_code)]

use aracanix_bot::domain::{
    Bet, BetStatus, Fixture, OddsMarket, OddsOutcome, Portfolio, PortfolioModel,
};
use rust_decimal::Decimal;

pub fn portfolio(id: i64, name: &str, active: bool) -> Portfolio {
    Portfolio {
        id: Some(id),
        name: Some(name.to_string()),
        is_active: active,
        starting_balance: Some(Decimal::from(1000)),
        current_balance: Some(Decimal::from(1000)),
        total_bets: Some(0),
        model: Some(PortfolioModel {
            model_name: Some("poisson-v2".to_string()),
        }),
    }
}

pub fn with_balance(mut p: Portfolio, current: Decimal, total_bets: u64) -> Portfolio {
    p.current_balance = Some(current);
    p.total_bets = Some(total_bets);
    p
}

pub fn bet(id: i64, home: &str, away: &str, status: BetStatus, profit: Option<Decimal>) -> Bet {
    Bet {
        id: Some(id),
        portfolio_id: Some(1),
        status: Some(status),
        home_team_name: Some(home.to_string()),
        away_team_name: Some(away.to_string()),
        market: Some("Match Winner".to_string()),
        selection: Some("Home".to_string()),
        stake: Some(Decimal::from(10)),
        odds: Some(Decimal::new(205, 2)),
        profit,
    }
}

pub fn fixture(id: i64, home: &str, away: &str) -> Fixture {
    let outcome = |name: &str, cents: i64| OddsOutcome {
        name: Some(name.to_string()),
        odds: Some(Decimal::new(cents, 2)),
    };
    Fixture {
        id: Some(id),
        home_team_name: Some(home.to_string()),
        away_team_name: Some(away.to_string()),
        league_name: Some("Eliteserien".to_string()),
        date: Some("2026-05-16T18:00:00Z".to_string()),
        odds: vec![OddsMarket {
            bet_name: Some("Match Winner".to_string()),
            odds: vec![
                outcome("Home", 210),
                outcome("Draw", 340),
                outcome("Away", 300),
            ],
        }],
    }
}
