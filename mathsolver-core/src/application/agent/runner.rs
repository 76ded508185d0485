use super::directive::AgentDirective;
use super::errors::AgentError;
use super::models::{AgentOptions, AgentOutcome, AgentStep, StopReason};
use super::runtime::{PARSE_RECOVERY_OBSERVATION, Scratchpad, ToolRuntime, render_question};
use crate::application::tooling::ToolRegistry;
use crate::config::ParseErrorPolicy;
use crate::domain::types::ConversationTurn;
use crate::infrastructure::model::ChatModel;
use tracing::{debug, info, warn};

/// Generation halts before the model can invent its own observation.
const STOP_SEQUENCES: [&str; 2] = ["\nObservation:", "\n\tObservation:"];

pub struct Agent {
    model: ChatModel,
    runtime: ToolRuntime,
}

impl Agent {
    pub fn new(model: ChatModel, registry: ToolRegistry) -> Self {
        Self {
            model,
            runtime: ToolRuntime::new(registry),
        }
    }

    pub fn runtime(&self) -> &ToolRuntime {
        &self.runtime
    }

    /// Answer the latest user turn of `history`.
    ///
    /// Makes at most `options.max_steps` model calls. Tool failures become
    /// observations; only a model transport failure (or a parse failure under
    /// [`ParseErrorPolicy::Raise`]) ends the run with an error.
    pub async fn run(
        &self,
        history: &[ConversationTurn],
        options: &AgentOptions,
    ) -> Result<AgentOutcome, AgentError> {
        let question = render_question(history).ok_or(AgentError::NoQuestion)?;
        info!(max_steps = options.max_steps, "Agent run started");

        let mut scratchpad = Scratchpad::default();
        let mut steps = Vec::new();

        for call in 1..=options.max_steps {
            let prompt = self.runtime.compose_prompt(&question, &scratchpad);
            debug!(call, "Submitting agent turn to model provider");
            let reply = self.model.complete(prompt, &STOP_SEQUENCES).await?;

            match self.runtime.parse_agent_action(&reply) {
                Ok(AgentDirective::Final { answer, .. }) => {
                    info!(model_calls = call, steps = steps.len(), "Agent returned final answer");
                    return Ok(AgentOutcome {
                        answer,
                        steps,
                        model_calls: call,
                        stopped: StopReason::FinalAnswer,
                    });
                }
                Ok(AgentDirective::CallTool {
                    thought,
                    tool,
                    input,
                }) => {
                    info!(tool = %tool, "Agent requested tool execution");
                    let observation = self.runtime.execute(&tool, &input).await;
                    scratchpad.push(reply, observation.text.clone());
                    steps.push(AgentStep {
                        thought,
                        tool: Some(tool),
                        input: Some(input),
                        observation: observation.text,
                        invoked: observation.invoked,
                    });
                }
                Err(failure) => match options.parse_errors {
                    ParseErrorPolicy::Raise => {
                        warn!(%failure, "Unparseable agent response");
                        return Err(AgentError::Parse {
                            failure,
                            output: reply,
                        });
                    }
                    ParseErrorPolicy::Recover => {
                        warn!(%failure, "Unparseable agent response, asking model to retry");
                        steps.push(AgentStep {
                            thought: reply.trim().to_string(),
                            tool: None,
                            input: None,
                            observation: PARSE_RECOVERY_OBSERVATION.to_string(),
                            invoked: false,
                        });
                        scratchpad.push(reply, PARSE_RECOVERY_OBSERVATION);
                    }
                },
            }
        }

        warn!(
            max_steps = options.max_steps,
            "Agent exceeded max model calls without a final answer"
        );
        Ok(AgentOutcome {
            answer: options.fallback_answer.clone(),
            steps,
            model_calls: options.max_steps,
            stopped: StopReason::StepLimit,
        })
    }
}
