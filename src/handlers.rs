use crate::error::{AppError, AppResult};
use crate::gemini::SharedAdviceModel;
use crate::models::{HealthResponse, HelpRequest};
use axum::{
    Extension,
    body::Bytes,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Json as ResponseJson, Response},
};
use tracing::{debug, info};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");
    Ok(ResponseJson(HealthResponse::ok()))
}

/// Builds the instruction sent to the model: the caller's situation and GPS
/// position embedded verbatim, plus the JSON shape the reply must follow.
pub fn build_advice_prompt(question: &str, lat: f64, lng: f64) -> String {
    format!(
        r#"You are a professional pet emergency assistant.
The caller's situation is: "{question}"
The caller's GPS position is: latitude {lat}, longitude {lng}

Reply strictly in the following JSON format, with no extra text:
{{
  "advice": "(string) Short, calm advice for handling the situation.",
  "mapUrl": "(string) A Google Maps search URL that looks for the most suitable place nearby (for example 'animal hospital' or '24 hour vet'), based on the situation and the GPS position."
}}"#
    )
}

/// Pet emergency advice handler
///
/// Accepts `{"question": ..., "lat": ..., "lng": ...}`, asks the model for
/// guidance, and relays the model's JSON reply (`{"advice": ..., "mapUrl":
/// ...}`) to the caller byte for byte. The handler owns method dispatch:
/// OPTIONS pre-flights get an empty 200 before any body validation, and
/// anything other than POST is answered with 405 plus an `Allow: POST` header.
pub async fn pet_help(
    Extension(model): Extension<SharedAdviceModel>,
    method: Method,
    body: Bytes,
) -> AppResult<Response> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed(method.to_string()));
    }

    // A body that is not valid JSON for the payload shape is reported the
    // same way as one with absent fields.
    let payload: HelpRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::MissingFields)?;
    let (question, lat, lng) = payload.fields().ok_or(AppError::MissingFields)?;

    info!("Help requested: '{}' at ({}, {})", question, lat, lng);

    let prompt = build_advice_prompt(question, lat, lng);

    info!("Requesting advice from the model");
    let advice_json = model.generate_advice(&prompt).await?;
    debug!("Model replied: {}", advice_json);

    // Relayed verbatim: the upstream text is trusted to honor the requested
    // schema and is not parsed or re-serialized here.
    Ok(([(header::CONTENT_TYPE, "application/json")], advice_json).into_response())
}
