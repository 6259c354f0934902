//! Messenger port: the boundary where replies leave the application.

use std::fmt;

use async_trait::async_trait;

use crate::domain::Reply;
use crate::error::Result;

/// Platform-neutral identifier of a chat or channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub i64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A channel the platform confirmed it can reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub id: ChannelId,
    pub title: Option<String>,
}

/// Renders and delivers replies on a chat platform.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Look the channel up; `None` when it is unknown or unreachable.
    async fn resolve_channel(&self, channel: ChannelId) -> Option<ResolvedChannel>;

    /// Signal that a reply is being prepared.
    async fn acknowledge(&self, channel: ChannelId) -> Result<()>;

    /// Deliver a reply. Failures are [`crate::error::Error::DeliveryFailure`].
    async fn send_reply(&self, channel: ChannelId, reply: &Reply) -> Result<()>;
}
