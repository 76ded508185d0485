use super::app::{AppConfig, ParseErrorPolicy};
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::{dotenv, from_filename};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    model: RawModel,
    #[serde(default)]
    agent: RawAgent,
    #[serde(default)]
    wikipedia: RawWikipedia,
    #[serde(default)]
    server: RawServer,
    greeting: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawModel {
    endpoint: Option<String>,
    api_path: Option<String>,
    model: Option<String>,
    api_key_env: Option<String>,
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
struct RawAgent {
    max_steps: Option<usize>,
    parse_errors: Option<ParseErrorPolicy>,
    fallback_answer: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawWikipedia {
    endpoint: Option<String>,
    top_k_results: Option<usize>,
    max_chars: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct RawServer {
    bind: Option<String>,
    #[serde(default)]
    cors_origins: Vec<String>,
}

/// Ensures environment variables are loaded from `config/.env` or `./.env`
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        if from_filename(ENV_PATH).is_ok() {
            return;
        }
        if let Err(error) = dotenv() {
            debug!(%error, "No .env file loaded");
        }
    });
}

/// Load and validate configuration.
///
/// An explicit path must exist. Without one, the default path is tried and
/// built-in defaults are used when it is absent.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    if let Some(path) = path {
        return read_config(path);
    }
    match read_config(Path::new(CONFIG_PATH)) {
        Err(ConfigError::NotFound { .. }) => {
            info!("Configuration file not found; using defaults");
            Ok(AppConfig::default())
        }
        other => other,
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    let model = parsed.model;
    if let Some(endpoint) = model.endpoint {
        config.model.endpoint = endpoint;
    }
    if let Some(api_path) = model.api_path {
        config.model.api_path = api_path;
    }
    if let Some(name) = model.model {
        config.model.model = name;
    }
    if let Some(env_var) = model.api_key_env {
        config.model.api_key_env = env_var;
    }
    config.model.temperature = model.temperature;

    let agent = parsed.agent;
    if let Some(max_steps) = agent.max_steps {
        if max_steps == 0 {
            return Err(ConfigError::InvalidMaxSteps);
        }
        config.agent.max_steps = max_steps;
    }
    if let Some(policy) = agent.parse_errors {
        config.agent.parse_errors = policy;
    }
    if let Some(fallback) = agent.fallback_answer {
        config.agent.fallback_answer = fallback;
    }

    let wikipedia = parsed.wikipedia;
    if let Some(endpoint) = wikipedia.endpoint {
        config.wikipedia.endpoint = endpoint;
    }
    if let Some(top_k) = wikipedia.top_k_results {
        if top_k == 0 {
            return Err(ConfigError::InvalidWikipediaLimit {
                field: "top_k_results",
            });
        }
        config.wikipedia.top_k_results = top_k;
    }
    if let Some(max_chars) = wikipedia.max_chars {
        if max_chars == 0 {
            return Err(ConfigError::InvalidWikipediaLimit { field: "max_chars" });
        }
        config.wikipedia.max_chars = max_chars;
    }

    if let Some(bind) = parsed.server.bind {
        config.server.bind = bind;
    }
    config.server.cors_origins = parsed.server.cors_origins;

    if let Some(greeting) = parsed.greeting {
        config.greeting = greeting;
    }

    config.bind_addr()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{DEFAULT_MAX_STEPS, DEFAULT_MODEL};
    use crate::constants::DEFAULT_GREETING;

    #[test]
    fn explicit_missing_path_is_not_found() {
        let result = load_config(Some(Path::new("/nonexistent/mathsolver.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mathsolver.toml");
        fs::write(&path, "").expect("write");

        let config = load_config(Some(&path)).expect("load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.model.model, DEFAULT_MODEL);
        assert_eq!(config.agent.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(config.greeting, DEFAULT_GREETING);
    }

    #[test]
    fn reads_sections() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mathsolver.toml");
        fs::write(
            &path,
            r#"
greeting = "Hello!"

[model]
model = "llama-3.3-70b-versatile"
api_key_env = "MY_KEY"
temperature = 0.2

[agent]
max_steps = 4
parse_errors = "raise"

[wikipedia]
top_k_results = 1

[server]
bind = "0.0.0.0:9000"
cors_origins = ["http://localhost:5173"]
"#,
        )
        .expect("write");

        let config = load_config(Some(&path)).expect("load");
        assert_eq!(config.greeting, "Hello!");
        assert_eq!(config.model.model, "llama-3.3-70b-versatile");
        assert_eq!(config.model.api_key_env, "MY_KEY");
        assert_eq!(config.model.temperature, Some(0.2));
        assert_eq!(config.agent.max_steps, 4);
        assert_eq!(config.agent.parse_errors, ParseErrorPolicy::Raise);
        assert_eq!(config.wikipedia.top_k_results, 1);
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.cors_origins.len(), 1);
    }

    #[test]
    fn rejects_zero_max_steps() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mathsolver.toml");
        fs::write(&path, "[agent]\nmax_steps = 0\n").expect("write");

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::InvalidMaxSteps)
        ));
    }

    #[test]
    fn rejects_zero_wikipedia_limits() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mathsolver.toml");

        fs::write(&path, "[wikipedia]\nmax_chars = 0\n").expect("write");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::InvalidWikipediaLimit { field: "max_chars" })
        ));

        fs::write(&path, "[wikipedia]\ntop_k_results = 0\n").expect("write");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::InvalidWikipediaLimit {
                field: "top_k_results"
            })
        ));
    }

    #[test]
    fn rejects_invalid_bind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mathsolver.toml");
        fs::write(&path, "[server]\nbind = \"not-an-addr\"\n").expect("write");

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::InvalidBind { .. })
        ));
    }

    #[test]
    fn reports_parse_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mathsolver.toml");
        fs::write(&path, "[agent]\nparse_errors = \"sometimes\"\n").expect("write");

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
