//! HTTP server command

use crate::core::Puzzle;
use crate::server::{AppState, create_app};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Run the game server until interrupted
///
/// Builds its own tokio runtime so the CLI entry point stays synchronous.
///
/// # Errors
/// Returns an error if the listen address cannot be bound or the runtime
/// fails to start.
pub fn run_serve(
    dictionary: Dictionary,
    catalog: Vec<Puzzle>,
    bind: &str,
    port: u16,
) -> Result<()> {
    let state = Arc::new(AppState::new(dictionary, catalog));
    let app = create_app(state);
    let addr = format!("{bind}:{port}");

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        crate::output::print_serving(&addr);
        axum::serve(listener, app).await.context("server error")
    })
}
