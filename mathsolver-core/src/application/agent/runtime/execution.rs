use super::{Observation, ToolRuntime};
use tracing::debug;

impl ToolRuntime {
    pub async fn execute(&self, tool: &str, input: &str) -> Observation {
        let observation = self.registry.invoke(tool, input).await;
        debug!(
            tool = %tool,
            observation_chars = observation.text.chars().count(),
            "Observation recorded"
        );
        observation
    }
}
