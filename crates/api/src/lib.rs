//! # CareBook API
//!
//! HTTP surface of the CareBook appointment service: specialties,
//! professionals, availability queries and booking admission.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Resolve durations, call the scheduling engine, talk to storage
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Environment-driven server and scheduling settings
//!
//! Handlers reach storage only through [`carebook_db::store::SlotStore`], so the
//! router can be served against PostgreSQL or a mock.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use carebook_db::store::SlotStore;
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Storage collaborator for clinic data and bookings
    pub store: Arc<dyn SlotStore>,

    /// Buffer applied around every booking, resolved once at startup
    pub buffer_minutes: i64,
}

/// Builds the application router with all routes attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Specialty and professional endpoints
        .merge(routes::clinic::routes())
        // Availability queries
        .merge(routes::availability::routes())
        // Booking admission
        .merge(routes::booking::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true))
}

/// Starts the API server with the provided configuration and storage
///
/// Initializes logging, builds the router, applies CORS and request timeout
/// layers, and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn SlotStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Appointment buffer set to {} minutes", config.buffer_minutes);

    let state = Arc::new(ApiState {
        store,
        buffer_minutes: config.buffer_minutes,
    });
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
