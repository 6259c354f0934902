use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use aracanix_bot::domain::Reply;
use aracanix_bot::error::{Error, Result};
use aracanix_bot::port::{ChannelId, Messenger, ResolvedChannel};

use super::CallLog;

/// Messenger fake recording every resolve, acknowledgment and send attempt.
#[derive(Clone)]
pub struct RecordingMessenger {
    attempts: Arc<Mutex<Vec<(ChannelId, Reply)>>>,
    delivered: Arc<Mutex<Vec<(ChannelId, Reply)>>>,
    resolvable: Arc<AtomicBool>,
    fail_acks: Arc<AtomicBool>,
    failing_sends: Arc<AtomicUsize>,
    resolve_calls: Arc<AtomicUsize>,
    log: CallLog,
}

impl Default for RecordingMessenger {
    fn default() -> Self {
        Self::with_log(CallLog::default())
    }
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: CallLog) -> Self {
        Self {
            attempts: Arc::default(),
            delivered: Arc::default(),
            resolvable: Arc::new(AtomicBool::new(true)),
            fail_acks: Arc::new(AtomicBool::new(false)),
            failing_sends: Arc::new(AtomicUsize::new(0)),
            resolve_calls: Arc::new(AtomicUsize::new(0)),
            log,
        }
    }

    pub fn set_resolvable(&self, resolvable: bool) {
        self.resolvable.store(resolvable, Ordering::SeqCst);
    }

    pub fn set_fail_acks(&self, fail: bool) {
        self.fail_acks.store(fail, Ordering::SeqCst);
    }

    /// Fail the next `count` send attempts.
    pub fn fail_next_sends(&self, count: usize) {
        self.failing_sends.store(count, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> Vec<(ChannelId, Reply)> {
        self.attempts.lock().expect("lock attempts").clone()
    }

    pub fn delivered(&self) -> Vec<Reply> {
        self.delivered
            .lock()
            .expect("lock delivered")
            .iter()
            .map(|(_, reply)| reply.clone())
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.delivered()
            .iter()
            .filter_map(|reply| reply.as_notice().map(str::to_string))
            .collect()
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn resolve_channel(&self, channel: ChannelId) -> Option<ResolvedChannel> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.log.push("resolve");
        self.resolvable
            .load(Ordering::SeqCst)
            .then(|| ResolvedChannel {
                id: channel,
                title: Some("test chat".to_string()),
            })
    }

    async fn acknowledge(&self, _channel: ChannelId) -> Result<()> {
        self.log.push("ack");
        if self.fail_acks.load(Ordering::SeqCst) {
            return Err(Error::DeliveryFailure("typing indicator rejected".into()));
        }
        Ok(())
    }

    async fn send_reply(&self, channel: ChannelId, reply: &Reply) -> Result<()> {
        self.log.push("send");
        self.attempts
            .lock()
            .expect("lock attempts")
            .push((channel, reply.clone()));

        let failing = self.failing_sends.load(Ordering::SeqCst);
        if failing > 0 {
            self.failing_sends.store(failing - 1, Ordering::SeqCst);
            return Err(Error::DeliveryFailure("chat unavailable".into()));
        }

        self.delivered
            .lock()
            .expect("lock delivered")
            .push((channel, reply.clone()));
        Ok(())
    }
}
