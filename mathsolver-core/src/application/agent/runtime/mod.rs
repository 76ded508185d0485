mod execution;
mod instructions;
mod parser;

pub(super) use super::directive::{AgentDirective, ParseFailure};
pub(super) use crate::application::tooling::{Observation, ToolRegistry};

pub use instructions::Scratchpad;
pub(crate) use instructions::render_question;

/// Observation fed back when a reply cannot be parsed and the loop recovers.
pub const PARSE_RECOVERY_OBSERVATION: &str =
    "Invalid or incomplete response. Respond using the exact Action/Final Answer format.";

/// Prompt assembly, reply parsing and tool dispatch for the dispatch loop.
#[derive(Clone)]
pub struct ToolRuntime {
    registry: ToolRegistry,
}

impl ToolRuntime {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}
