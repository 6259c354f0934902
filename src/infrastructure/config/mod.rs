//! Configuration modules.

pub mod backend;
pub mod logging;
pub mod settings;
pub mod summary;
pub mod telegram;
