//! Askbox web server
//!
//! Accepts visitor questions through an HTML form, validates them and stores
//! them in a relational database.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryQuestionRepository, RetryingQuestionRepository, SqlQuestionRepository};
use app::SubmissionService;
use auth::CsrfGuard;
use config::{Config, StoreBackend};
use domain::ports::QuestionRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService<dyn QuestionRepository>>,
    pub csrf: Arc<CsrfGuard>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for all pages
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(health))
        .route(
            "/Questions/Ask",
            get(handlers::show_ask_form).post(handlers::submit_question),
        )
        .route("/Questions/Success", get(handlers::show_success))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Limit requests per peer IP; the form is public
///
/// Needs the peer address, so the router must be served with connect info.
fn with_rate_limit(router: Router, config: &Config) -> anyhow::Result<Router> {
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_replenish_secs)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(router.layer(GovernorLayer {
        config: governor_config,
    }))
}

/// Pick and build the question store for this environment
async fn build_question_store(config: &Config) -> anyhow::Result<Arc<dyn QuestionRepository>> {
    match config.store_backend() {
        StoreBackend::InMemory => {
            tracing::warn!("Using in-memory question store; submissions are lost on restart");
            Ok(Arc::new(InMemoryQuestionRepository::new()))
        }
        StoreBackend::Sql => {
            tracing::info!("Connecting to database...");
            let db = adapters::sql::connect(config).await?;
            adapters::sql::ensure_schema(&db)
                .await
                .context("Failed to create database schema")?;
            tracing::info!("Database connected");

            Ok(Arc::new(RetryingQuestionRepository::new(
                SqlQuestionRepository::new(db),
                config.retry_policy,
            )))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,askbox_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Askbox...");

    // Load configuration
    let config = Config::from_env()?;

    // Create adapters
    let questions = build_question_store(&config).await?;

    // Create application services
    let submission_service = Arc::new(SubmissionService::new(questions, config.form_variant));
    tracing::info!(form_variant = %config.form_variant, "Submission service ready");

    let csrf = CsrfGuard::new(&config.csrf_secret, config.is_production())?;

    let state = AppState {
        submission_service,
        csrf: Arc::new(csrf),
    };

    let app = with_rate_limit(app_router(state), &config)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
