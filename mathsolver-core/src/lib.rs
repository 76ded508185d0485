//! Math solver assistant.
//!
//! A chat assistant that answers math and logic questions by running a
//! ReAct-style dispatch loop over a hosted chat-completion model, with an
//! encyclopedia lookup, a calculator and a step-by-step reasoning tool.

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{agent, assistant, session, tooling};
pub use config::{AppConfig, ConfigError};
pub use domain::types;
pub use infrastructure::{model, wikipedia};

#[cfg(feature = "server")]
pub use infrastructure::server;
