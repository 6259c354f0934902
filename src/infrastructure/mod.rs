//! Infrastructure layer.
//!
//! - [`config`] - Configuration loading and validation
//! - [`bootstrap`] - Builders wiring adapters into services
//! - `runtime` - The Telegram bot run loop (feature `telegram`)

pub mod bootstrap;
pub mod config;
#[cfg(feature = "telegram")]
pub mod runtime;

pub use config::settings::Config;
