//! Per-user talk window and cooldown.
//!
//! A user may talk freely for an active window that starts on their first
//! request. The first request at or after the end of that window is denied and
//! starts a cooldown; once the cooldown is over the next request opens a fresh
//! window.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use crate::base::types::RoleLevel;

/// Talk state for one user.
///
/// At most one of `start` and `rest_until` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserTimestampState {
    pub start: Option<DateTime<Utc>>,
    pub rest_until: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct RateLimiter {
    owner_id: Option<u64>,
    active_window: Duration,
    cooldown: Duration,
    users: Mutex<HashMap<u64, UserTimestampState>>,
}

impl RateLimiter {
    pub fn new(owner_id: Option<u64>, active_window: Duration, cooldown: Duration) -> Self {
        Self {
            owner_id,
            active_window,
            cooldown,
            users: Mutex::new(HashMap::new()),
        }
    }

    /// Whether `user_id` may talk to the model right now.
    pub async fn can_talk(&self, user_id: u64, role: RoleLevel) -> bool {
        self.can_talk_at(user_id, role, Utc::now()).await
    }

    /// Same as [`RateLimiter::can_talk`], evaluated at `now`.
    pub async fn can_talk_at(&self, user_id: u64, role: RoleLevel, now: DateTime<Utc>) -> bool {
        if self.owner_id == Some(user_id) || role.is_privileged() {
            return true;
        }

        let mut users = self.users.lock().await;
        let state = users.get(&user_id).copied().unwrap_or_default();

        if let Some(rest_until) = state.rest_until
            && now < rest_until
        {
            return false;
        }

        let Some(start) = state.start else {
            users.insert(user_id, UserTimestampState { start: Some(now), rest_until: None });
            return true;
        };

        if now - start >= self.active_window {
            let rest_until = now.checked_add_signed(self.cooldown).unwrap_or(DateTime::<Utc>::MAX_UTC);
            debug!(user_id, %rest_until, "Active window elapsed, starting cooldown.");
            users.insert(user_id, UserTimestampState { start: None, rest_until: Some(rest_until) });
            return false;
        }

        true
    }

    /// Current state for a user, if they have talked before.
    pub async fn state(&self, user_id: u64) -> Option<UserTimestampState> {
        self.users.lock().await.get(&user_id).copied()
    }
}
