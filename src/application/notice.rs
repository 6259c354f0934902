//! Last-resort text notices.

use tracing::error;

use crate::domain::Reply;
use crate::port::{ChannelId, Messenger};

/// Try once to deliver a short notice. A failure is logged and dropped.
///
/// Returns whether the notice went out.
pub async fn send_notice_best_effort(
    messenger: &dyn Messenger,
    channel: ChannelId,
    text: &str,
) -> bool {
    match messenger.send_reply(channel, &Reply::notice(text)).await {
        Ok(()) => true,
        Err(e) => {
            error!(channel = %channel, error = %e, "Failed to deliver error notice");
            false
        }
    }
}
