//! OpenAI-compatible client implementation (Groq, OpenAI, local gateways)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::ModelSettings;
use crate::infrastructure::model::traits::ModelProvider;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

const PROVIDER_ID: &str = "groq";

#[derive(Clone)]
pub struct OpenAIClient {
    base: HttpClientBase,
    api_path: String,
}

impl OpenAIClient {
    pub fn new(endpoint: impl Into<String>, api_path: impl Into<String>, api_key: String) -> Self {
        Self {
            base: HttpClientBase::new(PROVIDER_ID.to_string(), endpoint.into(), Some(api_key)),
            api_path: api_path.into(),
        }
    }

    pub fn from_settings(settings: &ModelSettings, api_key: String) -> Self {
        Self::new(settings.endpoint.clone(), settings.api_path.clone(), api_key)
    }
}

#[async_trait]
impl ModelProvider for OpenAIClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.base.build_url(&self.api_path);
        let payload = OpenAIRequest::from(&request);

        info!(
            provider = self.base.id.as_str(),
            model = request.model.as_str(),
            messages = request.messages.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let response: OpenAIResponse = self.base.post_with_bearer(&url, &payload).await?;
        debug!("Received response from OpenAI-compatible provider");

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| ModelError::invalid_response(&self.base.id, "missing content"))?;

        Ok(ModelResponse::new(content))
    }
}

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

impl From<&ModelRequest> for OpenAIRequest {
    fn from(request: &ModelRequest) -> Self {
        Self {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|msg| OpenAIMessage {
                    role: msg.role.as_str().to_string(),
                    content: Some(msg.content.clone()),
                })
                .collect(),
            stop: request.stop.clone(),
            temperature: request.temperature,
            stream: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatMessage, MessageRole};

    #[test]
    fn request_conversion_preserves_roles_and_stop() {
        let request = ModelRequest {
            model: "llama-3.1-8b-instant".into(),
            messages: vec![
                ChatMessage::new(MessageRole::System, "stay concise"),
                ChatMessage::new(MessageRole::User, "hi"),
            ],
            stop: vec!["\nObservation:".into()],
            temperature: Some(0.0),
        };
        let payload = serde_json::to_value(OpenAIRequest::from(&request)).expect("serialize");
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][1]["content"], "hi");
        assert_eq!(payload["stop"][0], "\nObservation:");
        assert_eq!(payload["stream"], false);
    }

    #[test]
    fn empty_stop_and_temperature_are_omitted() {
        let request = ModelRequest {
            model: "m".into(),
            messages: Vec::new(),
            stop: Vec::new(),
            temperature: None,
        };
        let payload = serde_json::to_value(OpenAIRequest::from(&request)).expect("serialize");
        assert!(payload.get("stop").is_none());
        assert!(payload.get("temperature").is_none());
    }

    #[test]
    fn response_with_null_content_is_readable() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let parsed: OpenAIResponse = serde_json::from_str(raw).expect("parse");
        assert!(parsed.choices[0].message.as_ref().and_then(|m| m.content.as_ref()).is_none());
    }
}
