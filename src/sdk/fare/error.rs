use serde::Deserialize;
use thiserror::Error;

// Helper struct to parse a structured error body from the Gemini API
#[derive(Deserialize, Debug)]
pub struct UpstreamErrorDetail {
    pub code: u32,
    pub message: String,
}
#[derive(Deserialize, Debug)]
pub struct UpstreamErrorPayload {
    pub error: UpstreamErrorDetail,
}

/// Everything that can go wrong between accepting a query and forwarding a
/// validated `FareData`. Internal distinctions drive logging and status
/// codes; the wire only ever sees an `ErrorEnvelope`.
#[derive(Error, Debug)]
pub enum FareError {
    #[error("Both a start and an end location are required")]
    InvalidInput,

    #[error("Server is missing its Gemini API key")]
    Misconfigured,

    // This variant holds the structured error from the API
    #[error("Upstream API error (code {code}): {message}")]
    UpstreamApi { code: u32, message: String },

    #[error("Upstream call failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    // The model answered, but not with anything matching the fare contract
    #[error("Upstream response did not match the fare contract: {0}")]
    UpstreamMalformed(String),

    #[error("Failed to parse upstream JSON: {0}")]
    UpstreamParse(#[from] serde_json::Error),
}

impl FareError {
    /// True for failures the caller could have avoided (HTTP 400 class).
    pub fn is_client_fault(&self) -> bool {
        matches!(self, FareError::InvalidInput)
    }
}
