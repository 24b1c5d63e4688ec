//! # Japri API
//!
//! The API crate provides the web server for the Japri room-scheduling
//! dashboard: reference data, the schedule listing, the live dashboard, and
//! the admin-only endpoints that add and remove schedule entries.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on `japri-core` and `japri-db`
//! - **Middleware**: Admin gate and error mapping
//! - **Config**: Environment-driven settings
//!
//! The API uses Axum as the web framework and SQLx for database interactions.
//! All scheduling rules (conflicts, clock, status) live in `japri-core`.

/// Configuration module for API settings
pub mod config;
/// Body, query and path extractors with JSON error responses
pub mod extract;
/// Request handlers
pub mod handlers;
/// Admin gate and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{path::Path, sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::middleware::auth::{AdminCredential, ADMIN_PASSWORD_HEADER};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Shared admin password
    pub admin: AdminCredential,
    /// Refresh interval advertised by the dashboard endpoint
    pub poll_interval_secs: u64,
    /// Upper bound on waiting for a room/day booking lock
    pub lock_timeout: Duration,
}

impl ApiState {
    pub fn new(config: &config::ApiConfig, db_pool: PgPool) -> Self {
        Self {
            db_pool,
            admin: AdminCredential::new(config.admin_password_hash.clone()),
            poll_interval_secs: config.poll_interval_secs,
            lock_timeout: config.lock_timeout,
        }
    }
}

/// Builds the application router with every route attached to `state`.
///
/// When `static_dir` is given, unmatched paths are served from it, which is
/// how a bundled front-end is hosted next to the API.
pub fn build_router(state: Arc<ApiState>, static_dir: Option<&Path>) -> Router {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Rooms, teachers and classes
        .merge(routes::reference::routes())
        // Schedule listing and management
        .merge(routes::schedule::routes())
        // Live dashboard and clock
        .merge(routes::dashboard::routes())
        // Admin login check
        .merge(routes::admin::routes())
        // Attach shared state to all routes
        .with_state(state);

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
///
/// Initializes logging, builds the router, applies CORS and the request
/// timeout, and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if config.admin_password_hash.is_none() {
        warn!("No admin password configured; schedule changes are disabled");
    }

    let state = Arc::new(ApiState::new(&config, db_pool));
    let app = build_router(state, config.static_dir.as_deref());

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static(ADMIN_PASSWORD_HEADER),
            ])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
