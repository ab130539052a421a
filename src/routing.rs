//! Application router configuration.

use axum::{
    Json, Router, middleware,
    routing::{get, post},
};

use crate::{category::categorize_endpoint, endpoints, logging::logging_middleware};

/// Return a router with all the app's routes.
pub fn build_router() -> Router {
    Router::new()
        .route(endpoints::CATEGORIZE, post(categorize_endpoint))
        .route(endpoints::HEALTH, get(get_health))
        .layer(middleware::from_fn(logging_middleware))
}

/// Report that the service is up and ready to categorize transactions.
async fn get_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
