use std::sync::Arc;

use axum::{Extension, Router, middleware};
use tower_http::trace::TraceLayer;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::cors;
use crate::gemini::{GeminiClient, SharedAdviceModel};
use crate::routes::create_routes;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rs_pet_help_svc=info,tower_http=debug,axum::rejection=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create the Axum application backed by the real Gemini client.
///
/// The client is constructed exactly once here and shared read-only across
/// request handling invocations.
pub fn create_app(config: &Config) -> Router {
    info!("Initializing application router");

    let model: SharedAdviceModel = Arc::new(GeminiClient::from_config(config));
    app_with_model(model)
}

/// Assemble routes and middleware around any advice model implementation.
/// Tests run the full stack against a scripted model through this seam.
pub fn app_with_model(model: SharedAdviceModel) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(Extension(model)) // Shared, immutable model handle
        .layer(middleware::from_fn(cors::allow_all))
        .layer(TraceLayer::new_for_http())
}
