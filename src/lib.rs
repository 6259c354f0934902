//! Aracanix bot - betting portfolio reports over Telegram.
//!
//! The bot answers chat commands with data from the Aracanix backend REST
//! API and posts a portfolio summary to one chat on a fixed interval.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - [`domain`] - Backend snapshots (portfolios, bets, fixtures) and
//!   renderer-agnostic reports
//! - [`port`] - Traits at the boundaries: [`port::PortfolioBackend`] and
//!   [`port::Messenger`]
//! - [`application`] - Report building, command handling, periodic summary
//! - [`adapter`] - HTTP backend client, Telegram, console output and the CLI
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram command listener and messenger
//!
//! # Example
//!
//! ```no_run
//! use aracanix_bot::application::report::build_portfolio_overview;
//! use aracanix_bot::adapter::outbound::backend::BackendClient;
//! use aracanix_bot::port::PortfolioBackend;
//!
//! # async fn demo() -> aracanix_bot::error::Result<()> {
//! let client = BackendClient::new("http://localhost:8080/api/v1");
//! let portfolios = client.fetch_portfolios().await?;
//! println!("{}", build_portfolio_overview(&portfolios));
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
