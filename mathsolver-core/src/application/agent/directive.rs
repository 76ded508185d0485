use thiserror::Error;

/// What one model reply asks the dispatch loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentDirective {
    Final { thought: String, answer: String },
    CallTool { thought: String, tool: String, input: String },
}

/// Model output that does not follow the Action / Final Answer grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("model returned an empty response")]
    Empty,
    #[error("response has neither an 'Action:' nor a 'Final Answer:' marker")]
    MissingAction,
    #[error("'Action: {tool}' is not followed by 'Action Input:'")]
    MissingActionInput { tool: String },
}
