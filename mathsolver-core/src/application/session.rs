use crate::domain::types::{ConversationTurn, MessageRole};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Append-only transcript of one user session.
///
/// Always starts with the greeting as its single assistant turn.
#[derive(Debug, Clone)]
pub struct SessionStore {
    turns: Vec<ConversationTurn>,
}

impl SessionStore {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![ConversationTurn::assistant(greeting)],
        }
    }

    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn all(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last_user_question(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|turn| turn.role() == MessageRole::User)
            .map(ConversationTurn::content)
    }
}

pub type SharedSession = Arc<Mutex<SessionStore>>;

/// Hands out one isolated [`SessionStore`] per session id.
///
/// Sessions live until the process exits; nothing is evicted.
pub struct SessionManager {
    greeting: String,
    sessions: Mutex<HashMap<String, SharedSession>>,
}

impl SessionManager {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub async fn create(&self) -> (String, SharedSession) {
        let id = Uuid::new_v4().to_string();
        let store = Arc::new(Mutex::new(SessionStore::new(self.greeting.clone())));
        self.sessions.lock().await.insert(id.clone(), store.clone());
        debug!(session_id = %id, "Session created");
        (id, store)
    }

    pub async fn get(&self, id: &str) -> Option<SharedSession> {
        self.sessions.lock().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
