// Config loading tests - shipped config file, overrides and startup errors

use mathsolver_core::config::{AppConfig, ConfigError, ParseErrorPolicy};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn shipped_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/mathsolver.toml")
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("mathsolver.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn shipped_config_matches_defaults() {
    let config = AppConfig::load(Some(&shipped_config())).expect("shipped config loads");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn returns_error_when_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/mathsolver.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn returns_error_on_malformed_toml() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[agent\nmax_steps = 3");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn rejects_zero_max_steps_and_bad_bind() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[agent]\nmax_steps = 0\n");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::InvalidMaxSteps)
    ));

    let path = write_config(dir.path(), "[server]\nbind = \"not an address\"\n");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::InvalidBind { .. })
    ));
}

#[test]
fn rejects_zero_wikipedia_max_chars() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[wikipedia]\nmax_chars = 0\n");
    let error = AppConfig::load(Some(&path)).expect_err("zero max_chars");
    assert_eq!(error.to_string(), "wikipedia.max_chars must be at least 1");
}

#[test]
fn parse_error_policy_is_read() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[agent]\nparse_errors = \"raise\"\n");
    let config = AppConfig::load(Some(&path)).expect("load");
    assert_eq!(config.agent.parse_errors, ParseErrorPolicy::Raise);
}

#[test]
#[serial]
fn missing_api_key_is_fatal() {
    let mut config = AppConfig::default();
    config.model.api_key_env = "MATHSOLVER_ABSENT_KEY".into();
    unsafe { env::remove_var("MATHSOLVER_ABSENT_KEY") };

    assert!(matches!(
        config.resolve_api_key(),
        Err(ConfigError::MissingApiKey { env_var }) if env_var == "MATHSOLVER_ABSENT_KEY"
    ));
}
