//! HTTP API Layer
//!
//! This crate provides the REST API for the claims backend using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims, login, and notifications
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects (camelCase wire form)
//! - **Error Handling**: Consistent error responses
//! - **Static assets**: Single-page-application fallback for non-API routes
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use interface_api::{create_router, config::ApiConfig, notifier::LogNotifier};
//!
//! let app = create_router(pool, config, Arc::new(LogNotifier));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod notifier;

use std::path::Path;
use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{auth, claims, health, notifications};
use crate::middleware::request_log_middleware;
use domain_claims::StatusNotifier;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
    pub notifier: Arc<dyn StatusNotifier>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
/// * `notifier` - Adapter for outbound status-update notifications
///
/// # Returns
///
/// Configured Axum router with all routes, middleware, and the static
/// single-page-application fallback
pub fn create_router(pool: PgPool, config: ApiConfig, notifier: Arc<dyn StatusNotifier>) -> Router {
    let assets_dir = Path::new(&config.static_dir).to_path_buf();
    let state = AppState {
        pool,
        config,
        notifier,
    };

    // Health routes
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/:id", get(claims::get_claim).patch(claims::update_claim));

    // API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .route("/login", post(auth::login))
        .route(
            "/send-status-update",
            post(notifications::send_status_update),
        )
        .layer(axum_middleware::from_fn(request_log_middleware));

    // Anything that is not an API route falls through to the built frontend
    let spa = ServeDir::new(&assets_dir).fallback(ServeFile::new(assets_dir.join("index.html")));

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
