//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the chat API endpoints with static serving of the
//! portfolio website under a single Axum router. The site itself is plain
//! files; the API is the only dynamic surface.

pub mod chat;
pub mod gate;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes used by the chat widget.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat::chat))
        .route("/verify-password", post(gate::verify_password))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Resolve the path to the portfolio website directory.
fn website_dir() -> PathBuf {
    std::env::var("WEBSITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("website"))
}

/// Full application: API routes + portfolio site served as static files at `/`.
pub fn app(state: AppState) -> Router {
    let website_service = ServeDir::new(website_dir()).append_index_html_on_directories(true);
    api_routes(state).fallback_service(website_service)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
