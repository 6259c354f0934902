//! Application services: report building, command handling and the
//! periodic summary.

pub mod command;
pub mod notice;
pub mod report;
pub mod summary;

pub use command::{BotCommand, CommandHandler, CommandOutcome};
pub use summary::{CycleOutcome, SummaryReporter, DEFAULT_SUMMARY_INTERVAL};
