mod cli;

use clap::Parser;
use cli::{Cli, RunMode};
use mathsolver_core::agent::AgentOptions;
use mathsolver_core::assistant::{MathAssistant, SubmitOutcome, build_registry};
use mathsolver_core::config::{AppConfig, ensure_env_loaded};
use mathsolver_core::constants::EMPTY_QUESTION_WARNING;
use mathsolver_core::model::{ChatModel, OpenAIClient};
use mathsolver_core::server;
use mathsolver_core::session::SessionStore;
use mathsolver_core::wikipedia::WikipediaClient;
use serde_json::json;
use std::error::Error;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli.mode, config = ?cli.config, "CLI arguments parsed");

    ensure_env_loaded();
    let config = AppConfig::load(cli.config.as_deref().map(Path::new))?;
    let api_key = config.resolve_api_key()?;

    let provider = Arc::new(OpenAIClient::from_settings(&config.model, api_key));
    let model = ChatModel::new(provider, config.model.model.clone())
        .with_temperature(config.model.temperature);
    let encyclopedia = Arc::new(WikipediaClient::from_settings(&config.wikipedia));
    let registry = build_registry(&config, model.clone(), encyclopedia)?;
    info!(
        model = model.model(),
        tools = ?registry.names(),
        "Assistant ready"
    );
    let assistant = MathAssistant::new(model, registry, AgentOptions::from(&config.agent));

    match cli.mode {
        RunMode::Serve => {
            let addr = match cli.bind {
                Some(addr) => addr,
                None => config.bind_addr()?,
            };
            server::serve(
                Arc::new(assistant),
                config.greeting.clone(),
                addr,
                &config.server.cors_origins,
            )
            .await?;
        }
        RunMode::Ask => {
            let question = load_prompt(&cli)?;
            let mut session = SessionStore::new(config.greeting.clone());
            match assistant.submit(&mut session, &question).await {
                SubmitOutcome::EmptyQuestion => {
                    return Err(EMPTY_QUESTION_WARNING.into());
                }
                SubmitOutcome::Answered { answer, steps } => {
                    let output = json!({
                        "answer": answer,
                        "tool_steps": steps,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
    }
    info!("Execution finished");
    Ok(())
}

fn load_prompt(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if !cli.prompt.is_empty() {
        return Ok(cli.prompt.join(" "));
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
