use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::GenerateError;

/// Path of the generation route, relative to the base URL.
const GENERATE_PATH: &str = "/generate";

/// Payload sent to the generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// The part of the generation response we use. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub generated_text: String,
}

/// Text-generation client bound to one base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GenerateClient {
    http: reqwest::Client,
    base_url: String,
}

impl GenerateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the generation route.
    pub fn endpoint(&self) -> String {
        format!("{}{GENERATE_PATH}", self.base_url.trim_end_matches('/'))
    }

    /// Send `prompt` to the endpoint and return the generated text.
    ///
    /// Any non-success status is an error; the response body is kept in
    /// the error for diagnostics.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = self.endpoint();
        let payload = GenerateRequest {
            prompt: prompt.to_string(),
        };

        info!(url = %url, payload = %serde_json::to_string(&payload)?, "calling generation endpoint");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status = status.as_u16(), error = %e, "failed to read error response body");
                    String::new()
                }
            };
            error!(status = status.as_u16(), body = %body, "generation endpoint returned error status");
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let raw: Value = serde_json::from_slice(&bytes)?;
        info!(response = %raw, "generation endpoint response");

        let parsed: GenerateResponse = serde_json::from_value(raw)?;
        Ok(parsed.generated_text)
    }
}
