//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  commands · summary     ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────────────┐                              ┌──────────────────┐
//! │ PortfolioBackend │                              │    Messenger     │
//! │  (HTTP adapter)  │                              │(Telegram adapter)│
//! └──────────────────┘                              └──────────────────┘
//! ```

pub mod outbound;

pub use outbound::backend::PortfolioBackend;
pub use outbound::messenger::{ChannelId, Messenger, ResolvedChannel};
