use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(
    name = "mathsolver",
    version,
    about = "Math and logic question assistant backed by a hosted LLM"
)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    pub config: Option<String>,
    /// Overrides `server.bind` from the configuration.
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long, value_enum, default_value_t = RunMode::Serve)]
    pub mode: RunMode,
    /// Question for `ask` mode; read from stdin when omitted.
    #[arg()]
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    Serve,
    Ask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::parse_from(["mathsolver"]);
        assert_eq!(cli.mode, RunMode::Serve);
        assert!(cli.bind.is_none());
        assert!(cli.prompt.is_empty());
    }

    #[test]
    fn ask_mode_collects_prompt_words() {
        let cli = Cli::parse_from([
            "mathsolver",
            "--mode",
            "ask",
            "--bind",
            "0.0.0.0:9000",
            "what",
            "is",
            "2+2",
        ]);
        assert_eq!(cli.mode, RunMode::Ask);
        assert_eq!(cli.bind.map(|addr| addr.port()), Some(9000));
        assert_eq!(cli.prompt.join(" "), "what is 2+2");
    }
}
