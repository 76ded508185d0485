use super::traits::ModelProvider;
use super::types::{ModelError, ModelRequest};
use crate::types::{ChatMessage, MessageRole};
use std::sync::Arc;
use tracing::debug;

/// A provider bound to one model id and sampling setup.
///
/// Cheap to clone; the dispatch loop and every tool that talks to the model
/// hold their own copy.
#[derive(Clone)]
pub struct ChatModel {
    provider: Arc<dyn ModelProvider>,
    model: String,
    temperature: Option<f32>,
}

impl ChatModel {
    pub fn new(provider: Arc<dyn ModelProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }


    pub async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        stop: &[&str],
    ) -> Result<String, ModelError> {
        debug!(
            provider = self.provider.id(),
            model = self.model.as_str(),
            messages = messages.len(),
            "Calling model"
        );
        let response = self
            .provider
            .chat(ModelRequest {
                model: self.model.clone(),
                messages,
                stop: stop.iter().map(|s| s.to_string()).collect(),
                temperature: self.temperature,
            })
            .await?;
        Ok(response.message.content)
    }

    /// Send a single user message and return the generated text.
    pub async fn complete(&self, prompt: impl Into<String>, stop: &[&str]) -> Result<String, ModelError> {
        self.chat(vec![ChatMessage::new(MessageRole::User, prompt)], stop)
            .await
    }
}
