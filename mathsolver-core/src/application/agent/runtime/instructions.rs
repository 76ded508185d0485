use super::ToolRuntime;
use crate::domain::types::{ConversationTurn, MessageRole};

const PREFIX: &str =
    "Answer the following questions as best you can. You have access to the following tools:";

const FORMAT_INSTRUCTIONS: &str = "Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{tool_names}]
Action Input: the input to the action
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question";

const SUFFIX: &str = "Begin!

Question: {input}
Thought:{agent_scratchpad}";

/// Reply/observation pairs accumulated during one run.
#[derive(Debug, Clone, Default)]
pub struct Scratchpad {
    entries: Vec<(String, String)>,
}

impl Scratchpad {
    pub fn push(&mut self, reply: impl Into<String>, observation: impl Into<String>) {
        self.entries.push((reply.into(), observation.into()));
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (reply, observation) in &self.entries {
            out.push_str(reply);
            out.push_str("\nObservation: ");
            out.push_str(observation);
            out.push_str("\nThought: ");
        }
        out
    }
}

impl ToolRuntime {
    pub fn compose_prompt(&self, question: &str, scratchpad: &Scratchpad) -> String {
        let tool_lines = self
            .registry
            .descriptors()
            .into_iter()
            .map(|tool| format!("{}: {}", tool.name, tool.description))
            .collect::<Vec<_>>()
            .join("\n");
        let format = FORMAT_INSTRUCTIONS.replace("{tool_names}", &self.registry.names().join(", "));
        let suffix = SUFFIX
            .replace("{input}", question)
            .replace("{agent_scratchpad}", &scratchpad.render());

        format!("{PREFIX}\n\n{tool_lines}\n\n{format}\n\n{suffix}")
    }
}

/// Renders the latest user question, prefixed by earlier turns when there are any.
///
/// The seeded greeting alone does not count as prior conversation.
pub fn render_question(history: &[ConversationTurn]) -> Option<String> {
    let last_user = history
        .iter()
        .rposition(|turn| turn.role() == MessageRole::User)?;
    let question = history[last_user].content().trim();
    let earlier = &history[..last_user];

    if !earlier.iter().any(|turn| turn.role() == MessageRole::User) {
        return Some(question.to_string());
    }

    let transcript = earlier
        .iter()
        .map(|turn| format!("{}: {}", turn.role().as_str(), turn.content().trim()))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!(
        "{question}\n\nConversation so far:\n{transcript}"
    ))
}
