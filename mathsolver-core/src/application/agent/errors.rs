use super::directive::ParseFailure;
use crate::infrastructure::model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("could not parse model output: {failure}")]
    Parse {
        #[source]
        failure: ParseFailure,
        output: String,
    },
    #[error("conversation has no user question to answer")]
    NoQuestion,
}

impl AgentError {
    pub fn user_message(&self) -> String {
        match self {
            AgentError::Model(err) => err.user_message(),
            AgentError::Parse { .. } => {
                "The model gave a response I could not understand. Please try rephrasing your question."
                    .to_string()
            }
            AgentError::NoQuestion => "Please enter a question.".to_string(),
        }
    }
}
