//! Model client implementations

pub mod base;
pub mod openai;

pub use base::HttpClientBase;
pub use openai::OpenAIClient;
