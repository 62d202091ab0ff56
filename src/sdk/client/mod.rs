pub mod render;

use crate::sdk::fare::{validate_fare_data, ErrorEnvelope, FareData, FareQuery};
use reqwest::blocking::Client;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;

pub use render::render_fare_data;

/// Failures as the user-facing side classifies them. Each variant maps to
/// one message category: connectivity, server, or unexpected reply.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Both a start and a destination are required")]
    MissingInput,

    #[error("A fare calculation is already in progress")]
    Busy,

    // Request never completed: connection refused, DNS, timeout
    #[error("Could not reach the fare server: {0}")]
    Network(reqwest::Error),

    #[error("Server responded with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Unexpected reply from the server: {0}")]
    Parse(String),
}

impl ClientError {
    /// Human-readable message for the terminal, one per failure category.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::MissingInput => {
                "Please enter both a start and a destination.".to_string()
            }
            ClientError::Busy => "A fare calculation is already in progress.".to_string(),
            ClientError::Network(_) => {
                "Could not reach the fare server. Please check your internet connection and try again."
                    .to_string()
            }
            ClientError::Http { .. } => {
                "The server could not calculate the fare. Please try again.".to_string()
            }
            ClientError::Parse(_) => {
                "Received an unexpected reply from the server. Please try again.".to_string()
            }
        }
    }
}

/// Blocking client for the relay's `/api/fare` endpoint.
pub struct FareClient {
    http: Client,
    base_url: String,
}

impl FareClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// One fare lookup. Blank input fails locally; no request is sent.
    pub fn calculate(&self, start: &str, end: &str) -> Result<FareData, ClientError> {
        let query = FareQuery::new(start, end);
        if !query.is_complete() {
            return Err(ClientError::MissingInput);
        }

        let url = format!("{}/api/fare", self.base_url);
        log::debug!("[CLIENT] POST {} for \"{}\" -> \"{}\"", url, start, end);

        let response = self
            .http
            .post(&url)
            .json(&query)
            .send()
            .map_err(ClientError::Network)?;

        let status = response.status();
        let text = response.text().map_err(ClientError::Network)?;

        if !status.is_success() {
            // Prefer the server's envelope; fall back to the bare status
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error)
                .unwrap_or_else(|_| format!("Server responded with status {}", status.as_u16()));
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let raw: Value = serde_json::from_str(&text)
            .map_err(|e| ClientError::Parse(format!("body is not JSON: {e}")))?;
        validate_fare_data(&raw).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// One interactive submission surface. While a call is outstanding the form
/// rejects further submissions, mirroring a disabled submit button.
pub struct FareForm {
    client: FareClient,
    in_flight: AtomicBool,
}

impl FareForm {
    pub fn new(client: FareClient) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn submit(&self, start: &str, end: &str) -> Result<FareData, ClientError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ClientError::Busy);
        }
        let result = self.client.calculate(start, end);
        self.in_flight.store(false, Ordering::Release);
        result
    }
}
