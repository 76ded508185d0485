use super::{AgentDirective, ParseFailure, ToolRuntime};
use once_cell::sync::Lazy;
use regex::Regex;

const FINAL_ANSWER_MARKER: &str = "Final Answer:";

static ACTION_WITH_INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Action\s*\d*\s*:[\s]*(.*?)[\s]*Action\s*\d*\s*Input\s*\d*\s*:[\s]*(.*)")
        .expect("valid action regex")
});
static ACTION_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Action\s*\d*\s*:[ \t]*(.*)").expect("valid action regex"));

impl ToolRuntime {
    pub fn parse_agent_action(&self, content: &str) -> Result<AgentDirective, ParseFailure> {
        parse_reply(content)
    }
}

/// A `Final Answer:` marker wins over any action in the same reply.
pub(crate) fn parse_reply(content: &str) -> Result<AgentDirective, ParseFailure> {
    if content.trim().is_empty() {
        return Err(ParseFailure::Empty);
    }

    if let Some(index) = content.find(FINAL_ANSWER_MARKER) {
        let thought = content[..index].trim().to_string();
        let answer = content[index + FINAL_ANSWER_MARKER.len()..]
            .trim()
            .to_string();
        return Ok(AgentDirective::Final { thought, answer });
    }

    if let Some(captures) = ACTION_WITH_INPUT.captures(content) {
        let whole = captures.get(0).map(|m| m.start()).unwrap_or_default();
        let thought = content[..whole].trim().to_string();
        let tool = captures[1].trim().trim_matches('*').trim().to_string();
        let input = clean_input(&captures[2]);
        return Ok(AgentDirective::CallTool {
            thought,
            tool,
            input,
        });
    }

    match ACTION_ONLY.captures(content) {
        Some(captures) => Err(ParseFailure::MissingActionInput {
            tool: captures[1].trim().to_string(),
        }),
        None => Err(ParseFailure::MissingAction),
    }
}

fn clean_input(raw: &str) -> String {
    let raw = raw.split("\nObservation").next().unwrap_or(raw);
    raw.trim().trim_matches('"').to_string()
}
