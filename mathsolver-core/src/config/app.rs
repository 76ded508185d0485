use super::defaults::*;
use super::error::ConfigError;
use crate::constants::DEFAULT_GREETING;
use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use tracing::warn;

/// Application configuration loaded from `mathsolver.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model: ModelSettings,
    pub agent: AgentSettings,
    pub wikipedia: WikipediaSettings,
    pub server: ServerSettings,
    pub greeting: String,
}

/// Hosted chat-completion endpoint (OpenAI-compatible).
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub endpoint: String,
    pub api_path: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentSettings {
    pub max_steps: usize,
    pub parse_errors: ParseErrorPolicy,
    pub fallback_answer: String,
}

/// What the dispatch loop does with model output it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Feed a corrective observation back and keep looping.
    #[default]
    Recover,
    /// Abort the run with an error.
    Raise,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WikipediaSettings {
    pub endpoint: String,
    pub top_k_results: usize,
    pub max_chars: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub bind: String,
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelSettings {
                endpoint: DEFAULT_MODEL_ENDPOINT.to_string(),
                api_path: DEFAULT_MODEL_API_PATH.to_string(),
                model: DEFAULT_MODEL.to_string(),
                api_key_env: DEFAULT_API_KEY_ENV.to_string(),
                temperature: None,
            },
            agent: AgentSettings {
                max_steps: DEFAULT_MAX_STEPS,
                parse_errors: ParseErrorPolicy::Recover,
                fallback_answer: DEFAULT_FALLBACK_ANSWER.to_string(),
            },
            wikipedia: WikipediaSettings {
                endpoint: DEFAULT_WIKIPEDIA_ENDPOINT.to_string(),
                top_k_results: DEFAULT_WIKIPEDIA_TOP_K,
                max_chars: DEFAULT_WIKIPEDIA_MAX_CHARS,
            },
            server: ServerSettings {
                bind: DEFAULT_BIND.to_string(),
                cors_origins: Vec::new(),
            },
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or the default path if None).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Read the model API key from the configured environment variable.
    ///
    /// A missing or blank key is a startup error, never recovered.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        let env_var = self.model.api_key_env.trim();
        match env::var(env_var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            Ok(_) | Err(_) => {
                warn!(env_var, "API key environment variable is not set");
                Err(ConfigError::MissingApiKey {
                    env_var: env_var.to_string(),
                })
            }
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: self.server.bind.clone(),
                source,
            })
    }
}
