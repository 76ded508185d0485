use super::error::ToolInvokeError;
use super::interface::Tool;
use crate::infrastructure::wikipedia::Encyclopedia;
use async_trait::async_trait;
use std::sync::Arc;

const NAME: &str = "Wikipedia";
const DESCRIPTION: &str = "Use to find general topic information from Wikipedia";
const NO_RESULT: &str = "No good Wikipedia Search Result was found";

/// Forwards the input verbatim to the encyclopedia and formats the summaries.
pub struct EncyclopediaTool {
    source: Arc<dyn Encyclopedia>,
    max_chars: usize,
}

impl EncyclopediaTool {
    pub fn new(source: Arc<dyn Encyclopedia>, max_chars: usize) -> Self {
        Self { source, max_chars }
    }
}

#[async_trait]
impl Tool for EncyclopediaTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolInvokeError> {
        let pages = self.source.search(input).await?;
        if pages.is_empty() {
            return Ok(NO_RESULT.to_string());
        }

        let text = pages
            .iter()
            .map(|page| format!("Page: {}\nSummary: {}", page.title, page.summary))
            .collect::<Vec<_>>()
            .join("\n\n");
        Ok(text.chars().take(self.max_chars).collect())
    }
}
