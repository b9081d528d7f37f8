use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model requested when `GEMINI_MODEL` does not override it
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// A generative text model that answers a prompt with a JSON-encoded string.
///
/// Request handlers depend on this trait only, so tests can swap the real
/// Gemini client for a scripted one.
#[async_trait]
pub trait AdviceModel: Send + Sync {
    async fn generate_advice(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Shared, process-wide handle to the model
pub type SharedAdviceModel = Arc<dyn AdviceModel>;

/// Client for Gemini's `generateContent` endpoint.
///
/// Built once at startup from configuration and reused for every request.
/// Each call is a single attempt; failures bubble up with the upstream detail
/// attached.
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.gemini_api_key, &config.gemini_model)
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            API_BASE_URL, self.model, self.api_key
        )
    }
}

#[async_trait]
impl AdviceModel for GeminiClient {
    async fn generate_advice(&self, prompt: &str) -> anyhow::Result<String> {
        let request = GenerateContentRequest::json_only(prompt);

        debug!("Sending generateContent request to model '{}'", self.model);

        let response = self
            .client
            .post(self.request_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Gemini API request failed ({status}): {error_text}"
            ));
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = extract_text(&body).ok_or_else(|| anyhow!("no content in Gemini response"))?;

        debug!("Received {} bytes of model output", text.len());
        Ok(text.to_string())
    }
}

// -- wire types for the generateContent call

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request with the model output constrained to JSON content.
    fn json_only(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

/// Text of the first candidate's first part, if the response carries one.
fn extract_text(response: &GenerateContentResponse) -> Option<&str> {
    let part = response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?;
    Some(&part.text)
}
