use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/professionals/:id/availability",
            get(handlers::availability::get_availability),
        )
        .route(
            "/api/professionals/:id/availability/next",
            get(handlers::availability::get_next_available),
        )
}
