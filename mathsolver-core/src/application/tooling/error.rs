use crate::infrastructure::model::ModelError;
use crate::infrastructure::wikipedia::EncyclopediaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolInvokeError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] EncyclopediaError),
    #[error("model call failed: {0}")]
    Model(#[from] ModelError),
    #[error("could not translate question into an expression: {0}")]
    Translation(String),
    #[error("failed to evaluate \"{expression}\": {reason}")]
    Evaluation { expression: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool name '{0}' is registered twice")]
    DuplicateName(String),
    #[error("tool name must not be empty")]
    EmptyName,
}
