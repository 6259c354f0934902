//! Portfolio snapshots as served by the backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use super::money::Amount;

/// Betting model attached to a portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioModel {
    #[serde(default)]
    pub model_name: Option<String>,
}

/// A tracked betting account.
///
/// Every field is optional on the wire; missing numbers are treated as zero
/// by the accessors so that a partially populated record still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_active: bool,
    #[serde(default)]
    pub starting_balance: Option<Amount>,
    #[serde(default)]
    pub current_balance: Option<Amount>,
    #[serde(default)]
    pub total_bets: Option<u64>,
    #[serde(default)]
    pub model: Option<PortfolioModel>,
}

/// An explicit `null` reads as inactive, same as an absent flag.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl Portfolio {
    /// Display name, or `N/A` when the backend omitted it.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("N/A")
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| m.model_name.as_deref())
            .unwrap_or("N/A")
    }

    #[must_use]
    pub fn current_balance(&self) -> Amount {
        self.current_balance.unwrap_or_default()
    }

    #[must_use]
    pub fn starting_balance(&self) -> Amount {
        self.starting_balance.unwrap_or_default()
    }

    #[must_use]
    pub fn total_bets(&self) -> u64 {
        self.total_bets.unwrap_or_default()
    }

    /// Return on investment in percent.
    ///
    /// `None` when the starting balance is zero or missing, since the ratio
    /// is undefined there.
    #[must_use]
    pub fn roi(&self) -> Option<Decimal> {
        let starting = self.starting_balance();
        if starting.is_zero() {
            return None;
        }
        let change = self.current_balance() - starting;
        change
            .checked_div(starting)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    }

    /// Case-insensitive exact match on the portfolio name.
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase() == query.trim().to_lowercase())
    }
}
