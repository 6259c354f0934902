//! Ports implemented by outbound adapters.

pub mod backend;
pub mod messenger;
