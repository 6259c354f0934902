//! Console messenger: prints replies to stdout.
//!
//! Backs the `report` CLI command, where the reply goes to the terminal
//! instead of a chat.

use std::io::Write;

use async_trait::async_trait;

use crate::domain::Reply;
use crate::error::Result;
use crate::port::{ChannelId, Messenger, ResolvedChannel};

/// Messenger writing every reply to standard output as plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMessenger;

impl ConsoleMessenger {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Messenger for ConsoleMessenger {
    async fn resolve_channel(&self, channel: ChannelId) -> Option<ResolvedChannel> {
        Some(ResolvedChannel {
            id: channel,
            title: Some("stdout".to_string()),
        })
    }

    async fn acknowledge(&self, _channel: ChannelId) -> Result<()> {
        Ok(())
    }

    async fn send_reply(&self, _channel: ChannelId, reply: &Reply) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", reply.to_string().trim_end())?;
        stdout.flush()?;
        Ok(())
    }
}
