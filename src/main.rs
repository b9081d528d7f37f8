use rs_pet_help_svc::app::{create_app, init_tracing};
use rs_pet_help_svc::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    init_tracing();

    info!("Starting Pet Help Service...");

    // Load configuration; the Gemini credential is read here, once
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Configuration loaded: {:?}", config);

    // Create the application
    let app = create_app(&config);

    // Create TCP listener
    let listener = match tokio::net::TcpListener::bind(&config.bind_address()).await {
        Ok(listener) => {
            info!("Server running on {}", config.server_url());
            info!("Health check: GET /health");
            info!("Advice endpoint: POST /api/get-help");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    // Start the server
    info!("Server starting...");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    } else {
        info!("Server shutdown gracefully");
    }
}
