//! Backend snapshots and renderer-agnostic reports.

pub mod bet;
pub mod fixture;
pub mod money;
pub mod portfolio;
pub mod report;

pub use bet::{Bet, BetStatus};
pub use fixture::{Fixture, OddsMarket, OddsOutcome, ThreeWayOdds};
pub use money::Amount;
pub use portfolio::{Portfolio, PortfolioModel};
pub use report::{FieldLine, Layout, Reply, Report, ReportField, ValueStyle};
