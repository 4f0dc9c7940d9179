mod config;
mod dto;
mod extract;
mod handler;
mod relay;
mod service;
mod template;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use std::{path::Path, sync::Arc};

use handler::AppState;
use relay::SmtpRelay;
use service::EmailService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config: {e}");
    });
    tracing::info!("Successfully loaded mail service config");

    // Setup service
    let relay = SmtpRelay::new(
        cfg.smtp_relay.clone(),
        cfg.smtp_username().to_string(),
        cfg.email_pass.clone(),
    );
    let service = EmailService::new(&cfg, Arc::new(relay));
    let port = cfg.port;
    let state = Arc::new(AppState {
        config: cfg,
        service,
    });

    // Setup router
    let router = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {port}: {e}");
            panic!("failed to bind to port {port}: {e}");
        });

    tracing::info!("🚀 Mail Service is running on port {}", port);
    tracing::info!("📧 Access the application at http://localhost:{}", port);

    axum::serve(listener, router)
        .await
        .expect("failed to start server");
}

fn build_router(state: Arc<AppState>) -> Router {
    let public_dir = Path::new(&state.config.public_dir).to_path_buf();

    Router::new()
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .route("/send-email", post(handler::send_email))
        .route("/health", get(handler::health_check))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
