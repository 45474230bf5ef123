//! Server initialization.
//!
//! Builds the axum application: static asset services for the message
//! catalogs and script bundles, and the catch-all GET handler that does the
//! server-side rendering. State is assembled by the caller (the binary, or
//! a test) so the app itself stays a pure function of its inputs.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::server::handler::render_page;
use crate::server::AppState;

/// Create the axum application.
pub fn create_app(state: AppState) -> Router {
    let public = state.config.public_dir.clone();
    tracing::info!(public_dir = %public.display(), "initializing application");

    Router::new()
        .nest_service("/messages", ServeDir::new(public.join("messages")))
        .nest_service("/js", ServeDir::new(public.join("js")))
        .fallback(get(render_page))
        .with_state(Arc::new(state))
}
