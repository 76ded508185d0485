use super::agent::{Agent, AgentOptions, AgentStep};
use super::session::SessionStore;
use super::tooling::{
    CalculatorTool, EncyclopediaTool, ReasoningTool, RegistryError, Tool, ToolRegistry,
};
use crate::config::AppConfig;
use crate::domain::types::ConversationTurn;
use crate::infrastructure::model::ChatModel;
use crate::infrastructure::wikipedia::Encyclopedia;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; the session was left untouched.
    EmptyQuestion,
    Answered {
        answer: String,
        steps: Vec<AgentStep>,
    },
}

/// Wires Wikipedia, Calculator and Reasoning Tool, in that order.
pub fn build_registry(
    config: &AppConfig,
    model: ChatModel,
    encyclopedia: Arc<dyn Encyclopedia>,
) -> Result<ToolRegistry, RegistryError> {
    let tools: Vec<Arc<dyn Tool>> = vec![
        Arc::new(EncyclopediaTool::new(
            encyclopedia,
            config.wikipedia.max_chars,
        )),
        Arc::new(CalculatorTool::new(model.clone())),
        Arc::new(ReasoningTool::new(model)),
    ];
    ToolRegistry::new(tools)
}

/// Turns one question into exactly one user turn and one assistant turn.
pub struct MathAssistant {
    agent: Agent,
    options: AgentOptions,
}

impl MathAssistant {
    pub fn new(model: ChatModel, registry: ToolRegistry, options: AgentOptions) -> Self {
        Self {
            agent: Agent::new(model, registry),
            options,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.agent.runtime().registry()
    }

    pub async fn submit(&self, session: &mut SessionStore, question: &str) -> SubmitOutcome {
        let question = question.trim();
        if question.is_empty() {
            return SubmitOutcome::EmptyQuestion;
        }

        session.append(ConversationTurn::user(question));

        let (answer, steps) = match self.agent.run(session.all(), &self.options).await {
            Ok(outcome) => {
                info!(
                    model_calls = outcome.model_calls,
                    tool_calls = outcome.tool_calls(),
                    stopped = ?outcome.stopped,
                    "Question answered"
                );
                (outcome.answer, outcome.steps)
            }
            Err(error) => {
                warn!(%error, "Agent run failed");
                (
                    format!("Sorry, I could not answer that. {}", error.user_message()),
                    Vec::new(),
                )
            }
        };

        session.append(ConversationTurn::assistant(answer.clone()));
        SubmitOutcome::Answered { answer, steps }
    }
}
