//! Outbound adapters (driven side).

pub mod backend;
pub mod console;
#[cfg(feature = "telegram")]
pub mod telegram;
