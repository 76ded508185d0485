mod calculator;
mod encyclopedia;
mod error;
mod interface;
mod reasoning;
mod registry;

pub use calculator::{CalculatorTool, evaluate_expression};
pub use encyclopedia::EncyclopediaTool;
pub use error::{RegistryError, ToolInvokeError};
pub use interface::Tool;
pub use reasoning::ReasoningTool;
pub use registry::{Observation, ToolDescriptor, ToolRegistry};
