mod directive;
mod errors;
mod models;
mod runner;
mod runtime;


pub use directive::{AgentDirective, ParseFailure};
pub use errors::AgentError;
pub use models::{AgentOptions, AgentOutcome, AgentStep, StopReason};
pub use runner::Agent;
pub use runtime::{PARSE_RECOVERY_OBSERVATION, Scratchpad, ToolRuntime};
