use super::dto::{
    AskRequest, AskResponse, ErrorResponse, SessionResponse, ToolListResponse, WarningResponse,
};
use super::routes::{sessions, tools};
use crate::application::agent::AgentStep;
use crate::application::tooling::ToolDescriptor;
use crate::domain::types::{ConversationTurn, MessageRole};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        sessions::create_session_handler,
        sessions::transcript_handler,
        sessions::ask_handler,
        tools::tools_handler
    ),
    components(
        schemas(
            SessionResponse,
            AskRequest,
            AskResponse,
            ToolListResponse,
            WarningResponse,
            ErrorResponse,
            AgentStep,
            ToolDescriptor,
            ConversationTurn,
            MessageRole
        )
    ),
    tags(
        (name = "sessions", description = "Chat sessions and question answering"),
        (name = "tools", description = "Tools available to the assistant")
    )
)]
pub struct ApiDoc;
