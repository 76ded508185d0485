pub mod model;
pub mod wikipedia;

#[cfg(feature = "server")]
pub mod server;
