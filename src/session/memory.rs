//! Trailing conversation window per user.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::base::types::Turn;

#[derive(Debug)]
pub struct ConversationMemory {
    capacity: usize,
    windows: Mutex<HashMap<u64, Vec<Turn>>>,
}

impl ConversationMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// The last `capacity` turns stored for `user_id`, oldest first.
    pub async fn history(&self, user_id: u64) -> Vec<Turn> {
        let windows = self.windows.lock().await;

        match windows.get(&user_id) {
            Some(turns) => turns[turns.len().saturating_sub(self.capacity)..].to_vec(),
            None => Vec::new(),
        }
    }

    /// Record one user/model exchange, evicting the oldest turns past capacity.
    pub async fn record_exchange(&self, user_id: u64, user_text: &str, model_text: &str) {
        let mut windows = self.windows.lock().await;
        let turns = windows.entry(user_id).or_default();

        turns.push(Turn::user(user_text));
        turns.push(Turn::model(model_text));

        let excess = turns.len().saturating_sub(self.capacity);
        turns.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::types::TurnRole;

    #[tokio::test]
    async fn unknown_user_has_empty_history() {
        let memory = ConversationMemory::new(6);
        assert!(memory.history(1).await.is_empty());
    }

    #[tokio::test]
    async fn never_exceeds_capacity() {
        let memory = ConversationMemory::new(6);

        for i in 0..10 {
            memory.record_exchange(1, &format!("q{i}"), &format!("a{i}")).await;
            assert!(memory.history(1).await.len() <= 6);
        }

        let history = memory.history(1).await;
        assert_eq!(history.len(), 6);
        assert_eq!(history[0], Turn::user("q7"));
        assert_eq!(history[5], Turn::model("a9"));
    }

    #[tokio::test]
    async fn turns_alternate_user_then_model() {
        let memory = ConversationMemory::new(6);

        memory.record_exchange(1, "hi", "hello!").await;
        memory.record_exchange(1, "how are you", "great~").await;

        let roles: Vec<TurnRole> = memory.history(1).await.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![TurnRole::User, TurnRole::Model, TurnRole::User, TurnRole::Model]);
    }

    #[tokio::test]
    async fn windows_are_per_user() {
        let memory = ConversationMemory::new(6);

        memory.record_exchange(1, "one", "uno").await;
        memory.record_exchange(2, "two", "dos").await;

        assert_eq!(memory.history(1).await, vec![Turn::user("one"), Turn::model("uno")]);
        assert_eq!(memory.history(2).await, vec![Turn::user("two"), Turn::model("dos")]);
    }
}
