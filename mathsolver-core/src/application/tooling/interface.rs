use async_trait::async_trait;

use super::error::ToolInvokeError;

/// A named capability the model may request during dispatch.
///
/// Input and output are plain text; the dispatch loop turns errors into
/// observations, so implementations just report what went wrong.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    async fn invoke(&self, input: &str) -> Result<String, ToolInvokeError>;
}
