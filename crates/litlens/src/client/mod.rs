//! Gemini API client.
//!
//! Thin async wrapper over the `generateContent` endpoint. Auth is a
//! `?key=API_KEY` query parameter (not header-based). There is no retry and
//! no caching: every failure is surfaced to the waiting user, who re-triggers
//! the action.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Config, api};
use crate::error::{ModelError, ModelResult};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Response body for `generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    /// HTTP client.
    client: Client,

    /// API key, passed as a query parameter.
    api_key: String,

    /// Model name.
    model: String,

    /// API base URL.
    api_url: String,
}

impl GeminiClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            model: config.model,
            api_url: config.api_url,
        })
    }

    /// Model name this client targets.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt and return the model's raw text response.
    ///
    /// The response is returned unmodified; no structure is imposed on it.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or an empty
    /// completion.
    pub async fn generate(&self, prompt: &str) -> ModelResult<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);

        let body = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt.to_string() }],
            }],
            generation_config: GenerationConfig {
                temperature: api::TEMPERATURE,
                max_output_tokens: api::MAX_OUTPUT_TOKENS,
            },
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.chars().count(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let response = self.handle_response(response).await?;
        let parsed: GenerateResponse = response.json().await?;

        Self::first_candidate_text(parsed)
    }

    /// Concatenate the text parts of the first candidate.
    fn first_candidate_text(response: GenerateResponse) -> ModelResult<String> {
        let candidate = response.candidates.into_iter().next().ok_or(ModelError::EmptyResponse)?;

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        if parts.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        let text: String = parts.into_iter().map(|p| p.text).collect();
        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        Ok(text)
    }

    /// Handle API response status codes.
    async fn handle_response(&self, response: reqwest::Response) -> ModelResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ModelError::rate_limited(retry_after))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ModelError::bad_request(text))
            }
            401 | 403 => {
                let text = response.text().await.unwrap_or_default();
                Err(ModelError::auth(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ModelError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ModelError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}
