use crate::application::agent::AgentStep;
use crate::application::tooling::ToolDescriptor;
use crate::domain::types::ConversationTurn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: String,
    pub messages: Vec<ConversationTurn>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponse {
    pub answer: String,
    /// Intermediate thoughts, one per tool request.
    pub tool_steps: Vec<AgentStep>,
    pub messages: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDescriptor>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarningResponse {
    pub warning: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
