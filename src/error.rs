use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Custom error type for the application
#[derive(Debug)]
pub enum AppError {
    /// The request body did not carry a usable question plus coordinates
    MissingFields,
    /// The request used a method other than POST or OPTIONS
    MethodNotAllowed(String),
    /// The model call, or anything around it, failed
    Advice(anyhow::Error),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingFields => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "missing 'question', 'lat', or 'lng' field".to_string(),
                }),
            )
                .into_response(),
            AppError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                Json(ErrorResponse {
                    error: format!("Method {method} Not Allowed"),
                }),
            )
                .into_response(),
            // Full detail stays in the log; the caller only sees the generic
            // message, whatever the underlying failure was.
            AppError::Advice(err) => {
                error!("AI advice request failed: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "AI response error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Advice(err)
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;
