//! Report builders.
//!
//! Pure functions that turn backend snapshots into [`Report`]s. No I/O
//! happens here; callers fetch data first and hand it in.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::fixture::ThreeWayOdds;
use crate::domain::money::{
    format_currency, format_decimal, format_percent, format_signed_currency, Amount, CURRENCY,
};
use crate::domain::{Bet, FieldLine, Fixture, Layout, Portfolio, Reply, Report, ReportField};
use crate::error::{Error, Result};

/// Most entries shown in a bet or fixture list.
pub const LIST_LIMIT: usize = 10;

/// Placeholder for a bet without a settled profit.
pub const UNSETTLED_PLACEHOLDER: &str = "---";

/// Placeholder when the match-winner market is not offered.
pub const ODDS_MISSING: &str = "Odds missing";

const KICKOFF_FORMAT: &str = "%d.%m.%Y %H:%M UTC";
const GENERATED_AT_FORMAT: &str = "%A %d %B %Y %H:%M UTC";

/// Overview of all portfolios with balance, ROI and model.
#[must_use]
pub fn build_portfolio_overview(portfolios: &[Portfolio]) -> Reply {
    if portfolios.is_empty() {
        return Reply::notice("No portfolios found.");
    }

    let mut report = Report::new("📊 Portfolio Overview");
    for p in portfolios {
        let status = if p.is_active {
            "🟢 Active"
        } else {
            "🔴 Inactive"
        };
        report.push_field(
            ReportField::new(format!("{}  {status}", p.display_name()), Layout::Inline)
                .line(FieldLine::labeled("Balance", format_currency(p.current_balance())))
                .line(FieldLine::labeled_code("ROI", format_percent(p.roi())))
                .line(FieldLine::labeled_code("Model", p.model_name())),
        );
    }
    Reply::Report(report)
}

/// The first [`LIST_LIMIT`] bets of a portfolio, in the order received.
#[must_use]
pub fn build_bet_list(portfolio: &Portfolio, bets: &[Bet]) -> Reply {
    if bets.is_empty() {
        return Reply::notice(format!(
            "Portfolio '{}' has no placed bets.",
            portfolio.display_name()
        ));
    }

    let mut report = Report::new(format!("🎲 Recent Bets for {}", portfolio.display_name()));
    if bets.len() > LIST_LIMIT {
        report = report.with_footer(format!("Showing {LIST_LIMIT} of {} bets.", bets.len()));
    }

    for bet in bets.iter().take(LIST_LIMIT) {
        let result = bet
            .profit
            .map_or_else(|| UNSETTLED_PLACEHOLDER.to_string(), format_signed_currency);

        report.push_field(
            ReportField::new(
                format!("{} {}", bet.status().glyph(), bet.matchup()),
                Layout::Block,
            )
            .line(FieldLine::labeled(
                "Bet",
                format!(
                    "{} ({})",
                    bet.selection.as_deref().unwrap_or("N/A"),
                    bet.market.as_deref().unwrap_or("N/A")
                ),
            ))
            .line(FieldLine::labeled(
                "Stake",
                format!(
                    "{} {CURRENCY} @ {}",
                    format_decimal(bet.stake.unwrap_or_default()),
                    format_decimal(bet.odds.unwrap_or_default())
                ),
            ))
            .line(FieldLine::labeled_code("Result", result)),
        );
    }
    Reply::Report(report)
}

fn format_three_way(odds: Option<ThreeWayOdds>) -> String {
    let Some(odds) = odds else {
        return ODDS_MISSING.to_string();
    };
    let price = |p: Option<Decimal>| p.map_or_else(|| "N/A".to_string(), |v| v.to_string());
    format!(
        "H: {} | D: {} | A: {}",
        price(odds.home),
        price(odds.draw),
        price(odds.away)
    )
}

fn format_kickoff(fixture: &Fixture) -> String {
    match fixture.kickoff() {
        Some(kickoff) => kickoff.format(KICKOFF_FORMAT).to_string(),
        None => fixture.date.clone().unwrap_or_else(|| "N/A".to_string()),
    }
}

/// The first [`LIST_LIMIT`] upcoming fixtures, in the order received.
#[must_use]
pub fn build_upcoming_fixtures(fixtures: &[Fixture]) -> Reply {
    if fixtures.is_empty() {
        return Reply::notice("No upcoming fixtures with odds found.");
    }

    let mut report = Report::new("⚽ Upcoming Fixtures with Odds").with_description(format!(
        "Showing the first {} fixtures in the system.",
        fixtures.len().min(LIST_LIMIT)
    ));

    for fixture in fixtures.iter().take(LIST_LIMIT) {
        report.push_field(
            ReportField::new(fixture.matchup(), Layout::Block)
                .line(FieldLine::text(format!(
                    "{} - {}",
                    fixture.league_name.as_deref().unwrap_or("N/A"),
                    format_kickoff(fixture)
                )))
                .line(FieldLine::code(format_three_way(fixture.match_winner()))),
        );
    }
    Reply::Report(report)
}

/// Aggregate status of all active portfolios.
///
/// Returns `Ok(None)` when there are no portfolios at all; the caller sends
/// nothing in that case. Inactive portfolios are skipped, totals included.
/// `pending_count` is asked once per active portfolio, in order.
pub fn build_periodic_summary<F>(
    portfolios: &[Portfolio],
    generated_at: DateTime<Utc>,
    mut pending_count: F,
) -> Result<Option<Report>>
where
    F: FnMut(&Portfolio) -> Result<u64>,
{
    if portfolios.is_empty() {
        return Ok(None);
    }

    let mut report = Report::new("🗂 Aracanix | Periodic Portfolio Summary").with_description(
        format!("Status update as of {}", generated_at.format(GENERATED_AT_FORMAT)),
    );

    let mut total_balance = Amount::ZERO;
    let mut total_bets: u64 = 0;

    for p in portfolios.iter().filter(|p| p.is_active) {
        total_balance += p.current_balance();
        total_bets += p.total_bets();
        let pending = pending_count(p)?;

        report.push_field(
            ReportField::new(format!("📈 {}", p.display_name()), Layout::Inline)
                .line(FieldLine::labeled_code("Balance", format_currency(p.current_balance())))
                .line(FieldLine::labeled_code("ROI", format_percent(p.roi())))
                .line(FieldLine::labeled_code("Pending bets", pending.to_string())),
        );
    }

    Ok(Some(report.with_footer(format!(
        "Total balance: {} | {total_bets} bets placed in total.",
        format_currency(total_balance)
    ))))
}

/// Lookup closure over prefetched pending counts keyed by portfolio id.
///
/// A portfolio without an id, or one that was not prefetched, is reported as
/// malformed upstream data.
pub fn pending_lookup(counts: &HashMap<i64, u64>) -> impl FnMut(&Portfolio) -> Result<u64> + '_ {
    move |p: &Portfolio| {
        let id = p.id.ok_or_else(|| {
            Error::MalformedUpstreamData(format!("portfolio '{}' has no id", p.display_name()))
        })?;
        counts.get(&id).copied().ok_or_else(|| {
            Error::MalformedUpstreamData(format!("no pending count for portfolio {id}"))
        })
    }
}
