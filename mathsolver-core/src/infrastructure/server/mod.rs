mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;


pub use docs::ApiDoc;
pub use error::{ApiError, ServerError};
pub use router::build_router;
pub use state::ServerState;

use crate::application::assistant::MathAssistant;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub async fn serve(
    assistant: Arc<MathAssistant>,
    greeting: String,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<(), ServerError> {
    info!(%addr, "Binding HTTP server");
    let state = Arc::new(ServerState::new(assistant, greeting));
    let app = build_router(state, cors_origins);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "HTTP server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}
