use crate::sdk::fare::error::{FareError, UpstreamErrorPayload};
use crate::sdk::fare::oracle::FareOracle;
use crate::sdk::fare::prompt::{build_prompt, PromptConfig};
use crate::sdk::fare::schema::fare_schema;
use crate::sdk::fare::types::FareQuery;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// --- Data structures for the generateContent exchange ---

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

// --- Gemini-backed oracle ---

pub struct GeminiOracle {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    prompt_config: PromptConfig,
}

impl GeminiOracle {
    /// `timeout` bounds the whole upstream call; deadline exceeded surfaces
    /// as an `UpstreamRequest` failure rather than an unbounded wait.
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, FareError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE_URL.to_string(),
            prompt_config: PromptConfig::default(),
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_prompt_config(mut self, config: PromptConfig) -> Self {
        self.prompt_config = config;
        self
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, FareError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| FareError::UpstreamMalformed("no candidate text in response".to_string()))
    }
}

#[async_trait]
impl FareOracle for GeminiOracle {
    async fn estimate(&self, query: &FareQuery) -> Result<Value, FareError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        let prompt = build_prompt(&query.start, &query.end, &self.prompt_config);

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: fare_schema(),
            },
        };

        log::debug!(
            "[ORACLE] Calling {} for \"{}\" -> \"{}\"",
            self.model,
            query.start,
            query.end
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Try to parse the structured error first
            if let Ok(payload) = serde_json::from_str::<UpstreamErrorPayload>(&text) {
                return Err(FareError::UpstreamApi {
                    code: payload.error.code,
                    message: payload.error.message,
                });
            }
            log::error!(
                "Gemini returned non-success status {} with unparseable body: {}",
                status,
                text
            );
            return Err(FareError::UpstreamMalformed(format!(
                "upstream status {status}"
            )));
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!("Failed to parse generateContent envelope: {}. Body: {}", e, text);
            e
        })?;

        let json_text = Self::extract_text(envelope)?;
        let raw: Value = serde_json::from_str(json_text.trim()).map_err(|e| {
            log::error!("Model text is not valid JSON: {}. Text: {}", e, json_text);
            FareError::UpstreamMalformed(format!("model text is not valid JSON: {e}"))
        })?;

        Ok(raw)
    }
}
