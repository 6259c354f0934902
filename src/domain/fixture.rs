//! Upcoming fixtures and their bookmaker odds.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Name of the three-way market extracted for display.
pub const MATCH_WINNER_MARKET: &str = "Match Winner";

/// One priced outcome in a market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OddsOutcome {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub odds: Option<Decimal>,
}

/// A bookmaker market with its priced outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsMarket {
    #[serde(default)]
    pub bet_name: Option<String>,
    #[serde(default)]
    pub odds: Vec<OddsOutcome>,
}

impl OddsMarket {
    fn price(&self, outcome: &str) -> Option<Decimal> {
        self.odds
            .iter()
            .find(|o| o.name.as_deref() == Some(outcome))
            .and_then(|o| o.odds)
    }
}

/// Home/draw/away prices of the match-winner market; any may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeWayOdds {
    pub home: Option<Decimal>,
    pub draw: Option<Decimal>,
    pub away: Option<Decimal>,
}

/// A scheduled match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub home_team_name: Option<String>,
    #[serde(default)]
    pub away_team_name: Option<String>,
    #[serde(default)]
    pub league_name: Option<String>,
    /// Kickoff as an ISO-8601 string.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub odds: Vec<OddsMarket>,
}

impl Fixture {
    #[must_use]
    pub fn matchup(&self) -> String {
        format!(
            "{} vs {}",
            self.home_team_name.as_deref().unwrap_or("N/A"),
            self.away_team_name.as_deref().unwrap_or("N/A")
        )
    }

    /// Parsed kickoff time. Timestamps without an offset are taken as UTC.
    #[must_use]
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// The match-winner prices, or `None` when the market is not offered.
    #[must_use]
    pub fn match_winner(&self) -> Option<ThreeWayOdds> {
        let market = self
            .odds
            .iter()
            .find(|m| m.bet_name.as_deref() == Some(MATCH_WINNER_MARKET))?;

        Some(ThreeWayOdds {
            home: market.price("Home"),
            draw: market.price("Draw"),
            away: market.price("Away"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn fixture_json() -> &'static str {
        r#"{
            "id": 1001,
            "homeTeamName": "Molde",
            "awayTeamName": "Brann",
            "leagueName": "Eliteserien",
            "date": "2024-05-16T18:00:00+00:00",
            "odds": [
                { "betName": "Goals Over/Under", "odds": [ { "name": "Over 2.5", "odds": 1.9 } ] },
                { "betName": "Match Winner", "odds": [
                    { "name": "Home", "odds": 1.85 },
                    { "name": "Draw", "odds": "3.40" },
                    { "name": "Away", "odds": 4.2 }
                ] }
            ]
        }"#
    }

    #[test]
    fn extracts_match_winner_prices() {
        let fixture: Fixture = serde_json::from_str(fixture_json()).unwrap();
        let odds = fixture.match_winner().unwrap();

        assert_eq!(odds.home, Some(dec!(1.85)));
        assert_eq!(odds.draw, Some(dec!(3.40)));
        assert_eq!(odds.away, Some(dec!(4.2)));
    }

    #[test]
    fn missing_market_yields_none() {
        let fixture = Fixture {
            odds: vec![OddsMarket {
                bet_name: Some("Both Teams Score".into()),
                odds: vec![],
            }],
            ..Default::default()
        };
        assert!(fixture.match_winner().is_none());
    }

    #[test]
    fn missing_outcome_is_tolerated() {
        let fixture = Fixture {
            odds: vec![OddsMarket {
                bet_name: Some(MATCH_WINNER_MARKET.into()),
                odds: vec![OddsOutcome {
                    name: Some("Home".into()),
                    odds: Some(dec!(2.1)),
                }],
            }],
            ..Default::default()
        };
        let odds = fixture.match_winner().unwrap();

        assert_eq!(odds.home, Some(dec!(2.1)));
        assert_eq!(odds.draw, None);
        assert_eq!(odds.away, None);
    }

    #[test]
    fn kickoff_accepts_offset_and_naive() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 16, 18, 0, 0).unwrap();

        let with_offset: Fixture = serde_json::from_str(fixture_json()).unwrap();
        assert_eq!(with_offset.kickoff(), Some(expected));

        let naive = Fixture {
            date: Some("2024-05-16T18:00:00".into()),
            ..Default::default()
        };
        assert_eq!(naive.kickoff(), Some(expected));

        let shifted = Fixture {
            date: Some("2024-05-16T20:00:00+02:00".into()),
            ..Default::default()
        };
        assert_eq!(shifted.kickoff(), Some(expected));
    }

    #[test]
    fn kickoff_rejects_garbage() {
        let fixture = Fixture {
            date: Some("next tuesday".into()),
            ..Default::default()
        };
        assert_eq!(fixture.kickoff(), None);
    }
}
