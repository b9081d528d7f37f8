use crate::handlers::{health_check, pet_help};
use axum::{Router, routing::any, routing::get};

/// Creates and configures all application routes.
///
/// The advice endpoint is routed with `any` because the handler does its own
/// method dispatch: it must answer OPTIONS pre-flights itself and name the
/// offending method in its 405 body.
pub fn create_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/get-help", any(pet_help))
}
