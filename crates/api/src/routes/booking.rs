use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/professionals/:id/bookings",
        get(handlers::booking::list_bookings).post(handlers::booking::book_slot),
    )
}
