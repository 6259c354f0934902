//! Bet snapshots and settlement status.

use serde::Deserialize;

use super::money::Amount;

/// Settlement status of a bet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
    Push,
    #[default]
    #[serde(other)]
    Unknown,
}

impl BetStatus {
    /// Glyph shown in front of the matchup.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pending => "⏳",
            Self::Won => "✅",
            Self::Lost => "❌",
            Self::Push => "⚪️",
            Self::Unknown => "❔",
        }
    }
}

/// A single wagered selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub portfolio_id: Option<i64>,
    #[serde(default)]
    pub status: Option<BetStatus>,
    #[serde(default)]
    pub home_team_name: Option<String>,
    #[serde(default)]
    pub away_team_name: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub selection: Option<String>,
    #[serde(default)]
    pub stake: Option<Amount>,
    #[serde(default)]
    pub odds: Option<Amount>,
    /// Absent while the bet is unsettled.
    #[serde(default)]
    pub profit: Option<Amount>,
}

impl Bet {
    #[must_use]
    pub fn status(&self) -> BetStatus {
        self.status.unwrap_or_default()
    }

    /// `Home vs Away`, with `N/A` for missing team names.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!(
            "{} vs {}",
            self.home_team_name.as_deref().unwrap_or("N/A"),
            self.away_team_name.as_deref().unwrap_or("N/A")
        )
    }
}
