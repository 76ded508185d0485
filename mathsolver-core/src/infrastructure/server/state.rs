use crate::application::assistant::MathAssistant;
use crate::application::session::SessionManager;
use std::sync::Arc;

pub struct ServerState {
    assistant: Arc<MathAssistant>,
    sessions: SessionManager,
}

impl ServerState {
    pub fn new(assistant: Arc<MathAssistant>, greeting: impl Into<String>) -> Self {
        Self {
            assistant,
            sessions: SessionManager::new(greeting),
        }
    }

    pub(crate) fn assistant(&self) -> Arc<MathAssistant> {
        Arc::clone(&self.assistant)
    }

    pub(crate) fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}
