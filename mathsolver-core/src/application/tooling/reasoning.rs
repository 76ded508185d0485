use super::error::ToolInvokeError;
use super::interface::Tool;
use crate::infrastructure::model::ChatModel;
use async_trait::async_trait;

const NAME: &str = "Reasoning Tool";
const DESCRIPTION: &str = "Use for step-by-step math and logic-based explanations";

const TEMPLATE: &str = "\nYou are an agent solving math questions. Think step-by-step and explain clearly:\nQuestion: {question}\nAnswer:\n";

/// Fills a fixed step-by-step template and returns the model's explanation.
pub struct ReasoningTool {
    model: ChatModel,
}

impl ReasoningTool {
    pub fn new(model: ChatModel) -> Self {
        Self { model }
    }

    fn render(question: &str) -> String {
        TEMPLATE.replace("{question}", question)
    }
}

#[async_trait]
impl Tool for ReasoningTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolInvokeError> {
        Ok(self.model.complete(Self::render(input), &[]).await?)
    }
}
