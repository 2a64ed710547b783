// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use chainchat_server::{
    agent::{AgentRouter, KeywordMatcher, ModelMatcher, Summarizer, ToolMatcher},
    api::{health::health_handler, prompt::prompt_handler, samples::samples_handler},
    config::{Config, MatcherStrategy},
    llm::OpenAiClient,
    tools::{build_registry, MoralisClient},
    AppState,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn run_http_server(state: AppState) {
    let api_router = Router::new()
        .route("/samples", get(samples_handler))
        .route("/prompt", post(prompt_handler));

    let app = Router::new()
        .route("/", get(health_handler))
        .nest("/api", api_router)
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], state.config.port));
    info!("🚀 HTTP Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chainchat_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing credentials are startup-fatal
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Failed to load configuration: {:#}", e);
            return;
        }
    };

    let api = MoralisClient::new(config.moralis_api_key.clone());
    if let Err(e) = api.ensure_initialized().await {
        error!("❌ Failed to initialize data client: {}", e);
        return;
    }

    let llm = OpenAiClient::new(config.openai_api_key.clone()).with_model(config.openai_model.clone());

    let registry = build_registry();
    info!("registered {} tools", registry.len());

    let matcher: Box<dyn ToolMatcher> = match config.matcher_strategy {
        MatcherStrategy::Keyword => Box::new(KeywordMatcher::new()),
        MatcherStrategy::Model => Box::new(ModelMatcher::new(llm.clone())),
    };

    let mut agent = AgentRouter::new(registry, matcher, api);
    if config.summary_enabled {
        agent = agent.with_summarizer(Summarizer::new(llm));
    }

    let state = AppState {
        config,
        agent: Arc::new(agent),
    };

    run_http_server(state).await;
}
