//! Application constants
//!
//! Single source of truth for paths and user-facing fixed texts.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/mathsolver.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// First assistant turn of every new session
pub const DEFAULT_GREETING: &str = "Hi! I'm a Math assistant. Ask me any math or logic question!";

/// Warning shown when a question is submitted empty
pub const EMPTY_QUESTION_WARNING: &str = "Please enter a question.";
