use super::error::RegistryError;
use super::interface::Tool;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
}

/// Result of one dispatch attempt, always text the model can read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub text: String,
    /// False when the requested name did not match any registered tool.
    pub invoked: bool,
}

/// Fixed name → tool mapping, resolved once at startup.
///
/// Lookup is an exact, case-sensitive match on the registered name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(tools.len());
        for (position, tool) in tools.iter().enumerate() {
            let name = tool.name();
            if name.trim().is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if index.insert(name.to_string(), position).is_some() {
                return Err(RegistryError::DuplicateName(name.to_string()));
            }
        }
        debug!(tool_count = tools.len(), "Tool registry built");
        Ok(Self { tools, index })
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|tool| ToolDescriptor {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    /// Invoke a tool by name. Never fails: unknown names and tool errors
    /// both come back as observations.
    pub async fn invoke(&self, name: &str, input: &str) -> Observation {
        let Some(tool) = self.index.get(name).map(|&position| &self.tools[position]) else {
            warn!(requested_tool = %name, "Unknown tool requested by agent");
            return Observation {
                text: format!(
                    "{name} is not a valid tool, try one of [{}].",
                    self.names().join(", ")
                ),
                invoked: false,
            };
        };

        debug!(tool = %name, input, "Dispatching tool");
        match tool.invoke(input).await {
            Ok(text) => {
                info!(tool = %name, success = true, "Tool executed");
                Observation {
                    text,
                    invoked: true,
                }
            }
            Err(error) => {
                warn!(tool = %name, %error, "Tool execution failed");
                Observation {
                    text: format!("Error: {error}"),
                    invoked: true,
                }
            }
        }
    }
}
