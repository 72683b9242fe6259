use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/specialties",
            post(handlers::clinic::create_specialty).get(handlers::clinic::list_specialties),
        )
        .route("/api/specialties/:id", get(handlers::clinic::get_specialty))
        .route("/api/professionals", post(handlers::clinic::create_professional))
        .route(
            "/api/professionals/:id",
            get(handlers::clinic::get_professional),
        )
}
