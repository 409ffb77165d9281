use std::sync::Arc;

use foliochat::services::gate::GateConfig;
use foliochat::services::prompt;
use foliochat::{llm, routes, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let profile = prompt::load_profile().expect("profile load failed");
    tracing::info!(name = %profile.name, "profile loaded");

    // Initialize LLM client (non-fatal: chat disabled if config missing).
    let llm = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client) as Arc<dyn llm::CompletionStream>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured — chat disabled");
            None
        }
    };

    let gate = GateConfig::from_env();
    if gate.is_none() {
        tracing::info!("no CHAT_PASSWORD set — widget runs open access");
    }

    let state = state::AppState::new(profile, llm, gate);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "foliochat listening");
    axum::serve(listener, app).await.expect("server failed");
}
