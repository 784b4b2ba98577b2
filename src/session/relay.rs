//! Single-slot relay of the most recent bot reply.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

/// The last reply and the channel it went to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatSlot {
    pub text: String,
    pub channel_id: u64,
}

#[derive(Debug)]
pub struct RepeatRelay {
    enabled: AtomicBool,
    slot: Mutex<Option<RepeatSlot>>,
}

impl RepeatRelay {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            slot: Mutex::new(None),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Overwrite the slot with a new reply. Last writer wins.
    pub async fn record(&self, channel_id: u64, text: &str) {
        *self.slot.lock().await = Some(RepeatSlot { text: text.to_string(), channel_id });
    }

    /// The text to resend for a message in `channel_id`, if any.
    pub async fn pending_for(&self, channel_id: u64) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }

        self.slot
            .lock()
            .await
            .as_ref()
            .filter(|slot| slot.channel_id == channel_id && !slot.text.is_empty())
            .map(|slot| slot.text.clone())
    }

    pub async fn slot(&self) -> Option<RepeatSlot> {
        self.slot.lock().await.clone()
    }
}
