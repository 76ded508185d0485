//! Model infrastructure module
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelProvider trait
//! - `clients` - HTTP client implementations
//! - `handle` - ChatModel, a provider bound to one model id

pub mod clients;
pub mod handle;
pub mod traits;
pub mod types;

pub use clients::OpenAIClient;
pub use handle::ChatModel;
pub use traits::ModelProvider;
pub use types::{ModelError, ModelRequest, ModelResponse};
