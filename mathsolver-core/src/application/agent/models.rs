use crate::config::{AgentSettings, ParseErrorPolicy};
use crate::config::defaults::{DEFAULT_FALLBACK_ANSWER, DEFAULT_MAX_STEPS};
use serde::Serialize;
use utoipa::ToSchema;

/// One entry of the scratch log, surfaced to the user as an intermediate thought.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct AgentStep {
    pub thought: String,
    /// Requested tool; `None` when the reply could not be parsed.
    pub tool: Option<String>,
    pub input: Option<String>,
    pub observation: String,
    /// Whether a registered tool actually ran for this step.
    pub invoked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    FinalAnswer,
    StepLimit,
}

#[derive(Debug, Clone)]
pub struct AgentOutcome {
    pub answer: String,
    pub steps: Vec<AgentStep>,
    pub model_calls: usize,
    pub stopped: StopReason,
}

impl AgentOutcome {
    pub fn tool_calls(&self) -> usize {
        self.steps.iter().filter(|step| step.invoked).count()
    }
}

#[derive(Debug, Clone)]
pub struct AgentOptions {
    /// Upper bound on model calls in one run.
    pub max_steps: usize,
    pub parse_errors: ParseErrorPolicy,
    pub fallback_answer: String,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            parse_errors: ParseErrorPolicy::Recover,
            fallback_answer: DEFAULT_FALLBACK_ANSWER.to_string(),
        }
    }
}

impl From<&AgentSettings> for AgentOptions {
    fn from(settings: &AgentSettings) -> Self {
        Self {
            max_steps: settings.max_steps,
            parse_errors: settings.parse_errors,
            fallback_answer: settings.fallback_answer.clone(),
        }
    }
}
