//! In-memory conversational state shared by all message handlers.
//!
//! Everything here lives for the lifetime of the process:
//! - Per-user talk windows and cooldowns.
//! - Per-user trailing conversation windows.
//! - The single-slot repeat relay.

pub mod memory;
pub mod rate_limit;
pub mod relay;

use std::{ops::Deref, sync::Arc};

use memory::ConversationMemory;
use rate_limit::RateLimiter;
use relay::RepeatRelay;

use crate::base::config::Config;

/// Session context handed to handlers.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone, Debug)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
pub struct SessionInner {
    pub rate_limiter: RateLimiter,
    pub memory: ConversationMemory,
    pub relay: RepeatRelay,
}

impl Deref for Session {
    type Target = SessionInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                rate_limiter: RateLimiter::new(config.owner_id, config.active_window(), config.cooldown()),
                memory: ConversationMemory::new(config.memory_turns),
                relay: RepeatRelay::new(config.repeat_enabled),
            }),
        }
    }
}
